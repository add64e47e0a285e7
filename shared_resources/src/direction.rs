#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Down,
    Stop,
    Up,
}

impl Direction {
    pub fn towards(from: f32, to: f32) -> Self {
        if to > from {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Direction::Down => String::from("down"),
            Direction::Stop => String::from("stop"),
            Direction::Up => String::from("up"),
        }
    }
}
