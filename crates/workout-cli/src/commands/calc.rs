use clap::Args;
use workout_core::read_package;

use super::{print_messages, Context};

#[derive(Args)]
pub struct CalcArgs {
    /// Activity code (RUN, WLK, SWM)
    code: String,
    /// Sensor values in package order
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

pub fn run(ctx: &Context, args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let training = read_package(&args.code, &args.values)?;
    let info = training.show_training_info()?;
    print_messages(ctx, &[info])
}
