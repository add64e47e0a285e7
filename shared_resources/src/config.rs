use std::fs;
use std::collections::HashMap;
use std::env;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub settings: HashMap<String, f64>,
    pub simulation: HashMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct ElevatorSettings {
    pub num_floors: u8,
    pub travel_speed: f32,
    pub door_speed: f32,
    pub door_open_duration: f64,
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub tick_rate: f64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: ElevatorSettings,
    pub simulation: SimulationConfig,
}

impl Config {
    pub fn get() -> Self {
        let file_path = "config.json";
        let config_file: ConfigFile = match fs::read_to_string(file_path) {
            Ok(content) => serde_json::from_str(&content).unwrap(),
            Err(_) => {
                println!("No configuration file provided, using default settings...");
                default_config_file()
            },
        };
        let num_floors = parse_env_args(config_file.settings["numFloors"] as u8);

        Config {
            settings: ElevatorSettings {
                num_floors: num_floors,
                travel_speed: config_file.settings["travelSpeed"] as f32,
                door_speed: config_file.settings["doorSpeed"] as f32,
                door_open_duration: config_file.settings["doorOpenDuration"],
            },
            simulation: SimulationConfig {
                tick_rate: config_file.simulation["tickRate"],
            },
        }
    }
}

fn default_config_file() -> ConfigFile {
    ConfigFile {
        settings: HashMap::from([
            (String::from("numFloors"), 4.0),
            (String::from("travelSpeed"), 0.017),
            (String::from("doorSpeed"), 0.05),
            (String::from("doorOpenDuration"), 5.0),
        ]),
        simulation: HashMap::from([
            (String::from("tickRate"), 60.0),
        ]),
    }
}

fn parse_env_args(default_num_floors: u8) -> u8 {
    let mut num_floors = default_num_floors;

    let args: Vec<String> = env::args().collect();
    for arg_pair in args.rchunks_exact(2) {
        match arg_pair[0].as_str() {
            "--floors" => {
                num_floors = match arg_pair[1].parse::<u8>() {
                    Ok(num) => num,
                    Err(_) => {
                        println!("floor count {} is not a number, skipping...", arg_pair[1]);
                        num_floors
                    },
                };
            },
            _ => {println!("illegal argument {}, skipping...", arg_pair[0]);},
        }
    }
    num_floors
}
