use workout_core::{demo_packages, process_packages};

use super::{print_messages, Context};

pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let messages = process_packages(&demo_packages())?;
    print_messages(ctx, &messages)
}
