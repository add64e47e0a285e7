use std::io::{stdout, Stdout, Write};

use crossbeam_channel::Receiver;
use crossterm::{cursor, terminal, Result, ExecutableCommand};

use shared_resources::config::ElevatorSettings;

use crate::fsm::SimulationStatus;
use crate::inputs;

pub fn main(
    settings: ElevatorSettings,
    status_rx: Receiver<SimulationStatus>,
) -> Result<()> {
    let mut stdout = stdout();

    loop {
        let status = match status_rx.recv() {
            Ok(status) => status,
            Err(_) => return Ok(()), // channel closed on shutdown
        };
        printstatus(&mut stdout, &settings, &status)?;
    }
}

fn printstatus(
    stdout: &mut Stdout,
    settings: &ElevatorSettings,
    status: &SimulationStatus,
) -> Result<()> {
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.execute(terminal::Clear(terminal::ClearType::All))?;

    write!(stdout, "+------------+------------+------------+------------+\r\n")?;
    write!(stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |\r\n", "FLOOR", "HALL UP", "HALL DOWN", "CAB")?;
    for floor in (0..settings.num_floors).rev() {
        let label = if floor == status.floor {
            format!("{} <[]>", floor + 1)
        } else {
            format!("{}", floor + 1)
        };
        write!(stdout, "+------------+------------+------------+------------+\r\n")?;
        write!(stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |\r\n",
            label,
            status.hall_lamps[floor as usize][0],
            status.hall_lamps[floor as usize][1],
            status.targets[floor as usize])?;
    }
    write!(stdout, "+------------+------------+------------+------------+\r\n\r\n")?;

    write!(stdout, "+------------+------------+\r\n")?;
    write!(stdout, "| {0:<10} | {1:<10} |\r\n", "STATE", status.behaviour.as_string())?;
    write!(stdout, "+------------+------------+\r\n")?;
    write!(stdout, "| {0:<10} | {1:<10} |\r\n", "FLOOR", status.floor + 1)?;
    write!(stdout, "+------------+------------+\r\n")?;
    write!(stdout, "| {0:<10} | {1:<10} |\r\n", "DIRECTION", status.direction.as_string())?;
    write!(stdout, "+------------+------------+\r\n")?;
    write!(stdout, "| {0:<10} | {1:<10.2} |\r\n", "POSITION", status.position)?;
    write!(stdout, "+------------+------------+\r\n")?;
    write!(stdout, "| {0:<10} | {1:<10.2} |\r\n", "DOOR", status.door_position)?;
    write!(stdout, "+------------+------------+\r\n\r\n")?;

    write!(stdout, "QUEUE:\r\n")?;
    for request in &status.queue {
        write!(stdout, "  floor {} {}\r\n", request.floor + 1, request.call.as_string())?;
    }
    write!(stdout, "\r\n")?;

    let hall_floors = (settings.num_floors as usize - 1).min(inputs::HALL_UP_KEYS.len());
    write!(stdout, "CONTROLS: cab 1-{} | hall up {} | hall down {} | quit esc\r\n",
        settings.num_floors,
        &inputs::HALL_UP_KEYS[..hall_floors],
        &inputs::HALL_DOWN_KEYS[..hall_floors])?;

    stdout.flush()?;
    Ok(())
}
