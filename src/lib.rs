// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross

//! A pure-Rust library for reading temperatures from the MLX90614 infrared
//! thermometer over I²C.
//!
//! The MLX90614 measures the temperature of whatever object is in its field
//! of view without touching it, along with the temperature of the sensor die
//! itself. Both values are exposed by this crate as degrees Celsius. Unlike
//! its bigger siblings (the MLX90640 and MLX90641 thermal cameras), the
//! MLX90614 performs all of its calibration on-chip, so reading it amounts to
//! fetching a 16-bit register and applying a fixed linear conversion.
//!
//! This library uses the [`embedded-hal`][embedded-hal] blocking I²C and
//! delay traits, meaning you should be able to use this library on any
//! platform with an `embedded-hal` implementation available. This library is
//! also `no_std` compatible.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal/*/embedded_hal/blocking/index.html
//!
//! # Usage
//! ```no_run
//! use linux_embedded_hal::{Delay, I2cdev};
//! use mlx90614::Mlx90614;
//!
//! let i2c_bus = I2cdev::new("/dev/i2c-1").expect("/dev/i2c-1 needs to be an I2C controller");
//! // Default address for these sensors is 0x5A
//! let mut sensor = Mlx90614::new(i2c_bus, Delay, mlx90614::DEFAULT_ADDRESS);
//! let ambient = sensor.ambient_temperature()?;
//! let object = sensor.object_temperature()?;
//! # Ok::<(), mlx90614::Error<I2cdev>>(())
//! ```
//!
//! The sensor can become unresponsive when it is polled too quickly, so a
//! failed register read is quietly retried a few times with a short pause in
//! between before the error is handed to the caller. The pause is performed
//! through the [`DelayMs`][delay-ms] implementation given at construction,
//! which keeps the driver portable and lets tests substitute a delay that
//! doesn't sleep at all.
//!
//! [delay-ms]: https://docs.rs/embedded-hal/0.2/embedded_hal/blocking/delay/trait.DelayMs.html

#![no_std]

pub mod calculations;
pub mod driver;
pub mod error;
pub mod register;
#[cfg(test)]
mod test;

pub use calculations::raw_to_celsius;
pub use driver::{Mlx90614, DEFAULT_ADDRESS};
pub use error::{Error, LibraryError};
pub use register::Register;
