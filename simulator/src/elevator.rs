use shared_resources::direction::Direction;

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, Clone)]
pub enum Behaviour {
    Idle,
    Moving,
    DoorOpen,
}

impl Behaviour {
    pub fn as_string(&self) -> String {
        match self {
            Behaviour::Idle => String::from("idle"),
            Behaviour::Moving => String::from("moving"),
            Behaviour::DoorOpen => String::from("doorOpen"),
        }
    }
}

/// Physical state of the car. `position` is the continuous car position
/// in floor units (floor f sits at position f), `floor` is the last floor
/// the car arrived at and only changes on arrival.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Elevator {
    pub floor: u8,
    pub position: f32,
    pub direction: Direction,
    pub behaviour: Behaviour,
    pub door_position: f32,
    pub dwell_elapsed: f64,
}

impl Elevator {
    pub fn new() -> Self {
        Elevator {
            floor: 0,
            position: 0.0,
            direction: Direction::Stop,
            behaviour: Behaviour::Idle,
            door_position: 0.0,
            dwell_elapsed: 0.0,
        }
    }
}
