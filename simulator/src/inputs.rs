/// ----- INPUTS MODULE -----
/// This module is responsible for polling the keyboard for call button
/// presses, returning channels for the control loop to listen to.
/// Hall call validity (no up at the top floor, no down at the bottom
/// floor) is enforced here, before an event ever reaches the core.

use std::thread::spawn;

use crossbeam_channel::{unbounded, Receiver};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use shared_resources::call::Call;
use shared_resources::config::ElevatorSettings;
use shared_resources::request::Request;

pub const HALL_UP_KEYS: &str = "qwertyuio";
pub const HALL_DOWN_KEYS: &str = "asdfghjkl";

#[derive(Debug, Clone, PartialEq)]
pub enum CallEvent {
    Hall(Request),
    Cab(u8),
}

pub fn init(settings: ElevatorSettings) -> (Receiver<CallEvent>, Receiver<bool>) {
    let (call_event_tx, call_event_rx) = unbounded();
    let (quit_tx, quit_rx) = unbounded();
    spawn(move || {
        terminal::enable_raw_mode().unwrap();
        loop {
            let key = match event::read().unwrap() {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };
            if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)) {
                quit_tx.send(true).unwrap();
                return;
            }
            if let KeyCode::Char(pressed) = key.code {
                if let Some(call_event) = call_event_for_key(pressed, settings.num_floors) {
                    call_event_tx.send(call_event).unwrap();
                }
            }
        }
    });
    (call_event_rx, quit_rx)
}

fn call_event_for_key(key: char, num_floors: u8) -> Option<CallEvent> {
    if let Some(digit) = key.to_digit(10) {
        let digit = digit as u8;
        if digit >= 1 && digit <= num_floors {
            return Some(CallEvent::Cab(digit - 1))
        }
        return None
    }
    if let Some(floor) = HALL_UP_KEYS.find(key) {
        let floor = floor as u8;
        if floor + 1 < num_floors {
            return Some(CallEvent::Hall(Request { floor, call: Call::HallUp }))
        }
        return None
    }
    if let Some(floor) = HALL_DOWN_KEYS.find(key) {
        let floor = floor as u8 + 1;
        if floor < num_floors {
            return Some(CallEvent::Hall(Request { floor, call: Call::HallDown }))
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_cab_calls() {
        assert_eq!(call_event_for_key('1', 4), Some(CallEvent::Cab(0)));
        assert_eq!(call_event_for_key('4', 4), Some(CallEvent::Cab(3)));
        assert_eq!(call_event_for_key('5', 4), None);
        assert_eq!(call_event_for_key('0', 4), None);
    }

    #[test]
    fn letter_rows_map_to_hall_calls() {
        assert_eq!(
            call_event_for_key('q', 4),
            Some(CallEvent::Hall(Request { floor: 0, call: Call::HallUp }))
        );
        assert_eq!(
            call_event_for_key('a', 4),
            Some(CallEvent::Hall(Request { floor: 1, call: Call::HallDown }))
        );
        assert_eq!(
            call_event_for_key('d', 4),
            Some(CallEvent::Hall(Request { floor: 3, call: Call::HallDown }))
        );
    }

    #[test]
    fn calls_not_offered_at_the_end_floors_are_rejected() {
        // 'r' would be hall up at the top floor, 'f' hall down above it
        assert_eq!(call_event_for_key('r', 4), None);
        assert_eq!(call_event_for_key('f', 4), None);
    }
}
