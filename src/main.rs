mod constants;
mod interpreter;
mod logging;
mod matrix;
mod picture;
mod render;

use std::{error::Error, env};

use logging::init_logging;

#[show_image::main]
fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let arguments: Vec<String> = env::args().collect();

    if arguments.len() < 2 {
        log::info!("A path to a script wasn't provided. '{}' was chosen by default.", constants::DEFAULT_SCRIPT);
        interpreter::run_script(constants::DEFAULT_SCRIPT)?;
    } else {
        for path in &arguments[1..] {
            log::info!("Running script '{}'.", path);
            interpreter::run_script(path)?;
        }
    }

    Ok(())
}
