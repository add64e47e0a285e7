/// ----- STATE MACHINE MODULE -----
/// This module owns the simulation state: the car, the hall request
/// backlog, the committed target floors and the hall button lamps.
/// `hall_call` and `cab_call` feed events in, `tick` advances the
/// machine one step, `status` returns the snapshot the display reads.

use shared_resources::call::Call;
use shared_resources::config::ElevatorSettings;
use shared_resources::direction::Direction;
use shared_resources::request::Request;
use shared_resources::request_buffer::RequestBuffer;

use crate::elevator::{Behaviour, Elevator};
use crate::requests::TargetFloors;

const HOME_FLOOR: u8 = 0;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct SimulationStatus {
    pub behaviour: Behaviour,
    pub floor: u8,
    pub position: f32,
    pub direction: Direction,
    pub door_position: f32,
    pub targets: Vec<bool>,
    pub hall_lamps: Vec<[bool; 2]>,
    pub queue: Vec<Request>,
}

pub struct Fsm {
    settings: ElevatorSettings,
    elevator: Elevator,
    queue: RequestBuffer,
    targets: TargetFloors,
    hall_lamps: Vec<[bool; 2]>,
}

impl Fsm {
    pub fn new(settings: ElevatorSettings) -> Self {
        let num_floors = settings.num_floors;
        Fsm {
            settings,
            elevator: Elevator::new(),
            queue: RequestBuffer::new(),
            targets: TargetFloors::new(num_floors),
            hall_lamps: vec![[false; 2]; num_floors as usize],
        }
    }

    pub fn hall_call(&mut self, floor: u8, call: Call) {
        self.hall_lamps[floor as usize][call as usize] = true;
        self.queue.insert_request(Request { floor, call });
    }

    // Cab calls skip the backlog and are committed immediately.
    pub fn cab_call(&mut self, floor: u8) {
        self.targets.add(floor);
    }

    pub fn tick(&mut self, dt: f64) {
        if self.elevator.behaviour == Behaviour::DoorOpen {
            self.update_door_open(dt);
            return;
        }

        if self.elevator.behaviour == Behaviour::Idle {
            self.promote_front_request();
        }

        let next_target = match self.targets.next() {
            Some(floor) => floor,
            None => {
                // nothing to serve, return to the bottom floor
                if self.elevator.floor == HOME_FLOOR {
                    self.elevator.behaviour = Behaviour::Idle;
                    return;
                }
                self.targets.add(HOME_FLOOR);
                HOME_FLOOR
            },
        };

        if next_target == self.elevator.floor {
            self.elevator.behaviour = Behaviour::Idle;
            return;
        }
        self.drive_towards(next_target);
    }

    pub fn status(&self) -> SimulationStatus {
        SimulationStatus {
            behaviour: self.elevator.behaviour.clone(),
            floor: self.elevator.floor,
            position: self.elevator.position,
            direction: self.elevator.direction,
            door_position: self.elevator.door_position,
            targets: self.targets.get_floors(),
            hall_lamps: self.hall_lamps.clone(),
            queue: self.queue.get_requests(),
        }
    }

    fn update_door_open(&mut self, dt: f64) {
        if self.targets.has_any() {
            // a cab call arrived while dwelling, shut the doors and go serve it
            self.elevator.behaviour = Behaviour::Idle;
            self.elevator.dwell_elapsed = 0.0;
            self.elevator.door_position = 0.0;
            return;
        }

        let door_speed = self.settings.door_speed;
        let elevator = &mut self.elevator;
        elevator.door_position = (elevator.door_position + door_speed).min(1.0);
        elevator.dwell_elapsed += dt;
        if elevator.dwell_elapsed >= self.settings.door_open_duration {
            elevator.behaviour = Behaviour::Idle;
            elevator.dwell_elapsed = 0.0;
            self.promote_front_request();
        }
    }

    fn promote_front_request(&mut self) {
        if let Some(request) = self.queue.front() {
            self.targets.add(request.floor);
            self.queue.remove_request(request);
        }
    }

    fn drive_towards(&mut self, target: u8) {
        let travel_speed = self.settings.travel_speed;
        let target_position = target as f32;

        let elevator = &mut self.elevator;
        elevator.behaviour = Behaviour::Moving;
        elevator.door_position = 0.0;
        elevator.direction = Direction::towards(elevator.position, target_position);
        elevator.position += match elevator.direction {
            Direction::Up => travel_speed,
            _ => -travel_speed,
        };

        let arrived = match elevator.direction {
            Direction::Up => elevator.position >= target_position,
            _ => elevator.position <= target_position,
        };
        if arrived {
            // snap exactly to the floor
            elevator.position = target_position;
            elevator.floor = target;
            elevator.behaviour = Behaviour::DoorOpen;
            elevator.door_position = 0.0;
            elevator.dwell_elapsed = 0.0;
            self.targets.clear(target);
            self.clear_hall_lamps(target);
        }
    }

    fn clear_hall_lamps(&mut self, floor: u8) {
        let top_floor = self.settings.num_floors - 1;
        if floor == HOME_FLOOR {
            self.hall_lamps[floor as usize][Call::HallUp as usize] = false;
        } else if floor == top_floor {
            self.hall_lamps[floor as usize][Call::HallDown as usize] = false;
        } else {
            for call in Call::iter() {
                self.hall_lamps[floor as usize][call as usize] = false;
            }
        }
    }
}
