use std::env;
use std::path::Path;

use anyhow::{bail, Context};
use linux_embedded_hal::{Delay, I2cdev};

use mlx90614::{Mlx90614, DEFAULT_ADDRESS};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        bail!("At most two arguments are accepted: [I2C bus] [sensor address]");
    }
    let address: u8 = match args.get(2) {
        Some(arg) if arg.starts_with("0x") => {
            let hex_digits = arg.split_at(2).1;
            u8::from_str_radix(hex_digits, 16)
                .context("If the address starts with 0x, its a base-16 number")?
        }
        Some(arg) => arg.parse().context("The address to be an integer")?,
        None => DEFAULT_ADDRESS,
    };
    let bus_path = Path::new(args.get(1).map(String::as_str).unwrap_or("/dev/i2c-1"));
    let bus = I2cdev::new(bus_path).context("The given path should work as an I2C device")?;
    let mut sensor = Mlx90614::new(bus, Delay, address);
    println!("{}", sensor.ambient_temperature()?);
    println!("{}", sensor.object_temperature()?);
    Ok(())
}
