use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{select, tick, unbounded};
use crossterm::terminal;

use shared_resources::config::Config;

pub mod debug;
pub mod elevator;
pub mod fsm;
pub mod inputs;
pub mod requests;

fn main() -> std::io::Result<()> {
    // READ CONFIGURATION
    let config = Config::get();

    // INITIALIZE INPUTS MODULE
    let (call_event_rx, quit_rx) = inputs::init(config.settings.clone());

    // INITIALIZE DEBUG MODULE
    let (status_tx, status_rx) = unbounded();
    {
        let settings = config.settings.clone();
        thread::spawn(move || debug::main(settings, status_rx));
    }

    // INITIALIZE STATE MACHINE
    let mut fsm = fsm::Fsm::new(config.settings.clone());

    let timer = tick(Duration::from_secs_f64(1.0 / config.simulation.tick_rate));
    let mut last_tick = Instant::now();

    loop {
        select! {
            recv(call_event_rx) -> msg => {
                match msg.unwrap() {
                    inputs::CallEvent::Hall(request) => fsm.hall_call(request.floor, request.call),
                    inputs::CallEvent::Cab(floor) => fsm.cab_call(floor),
                }
            },
            recv(timer) -> _ => {
                let dt = last_tick.elapsed().as_secs_f64();
                last_tick = Instant::now();
                fsm.tick(dt);
                status_tx.send(fsm.status()).unwrap();
            },
            recv(quit_rx) -> _ => {
                terminal::disable_raw_mode().unwrap();
                println!("STOPPING PROGRAM...");
                return Ok(())
            },
        }
    }
}
