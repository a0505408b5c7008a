// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

use crate::calculations::raw_to_celsius;
use crate::error::{Error, LibraryError};
use crate::register::Register;

/// The factory-default I²C address of the MLX90614.
///
/// The address is configurable through the
/// [`SlaveAddress`][Register::SlaveAddress] EEPROM register, but nearly every
/// module ships responding at 0x5A.
pub const DEFAULT_ADDRESS: u8 = 0x5A;

/// The default number of read transactions to attempt before giving up.
pub(crate) const DEFAULT_COMM_RETRIES: u8 = 5;

/// How long to pause between failed read attempts, in milliseconds.
///
/// The sensor can stop responding when it is polled too quickly; the pause
/// gives it time to recover before the next attempt.
pub(crate) const RETRY_DELAY_MS: u16 = 100;

/// Driver for the MLX90614 infrared thermometer.
///
/// The sensor continuously measures on its own; this driver just fetches the
/// finished results out of its RAM. The two interesting ones are the ambient
/// (die) temperature and the object temperature seen by the primary IR
/// channel, available through [`ambient_temperature`] and
/// [`object_temperature`]. The rest of the register map can be read with
/// [`read_register`].
///
/// The driver owns its I²C bus and a delay provider for the whole of its
/// lifetime; both are handed back by [`release`]. Sharing one driver between
/// threads requires external synchronization, none is provided here.
///
/// [`ambient_temperature`]: Mlx90614::ambient_temperature
/// [`object_temperature`]: Mlx90614::object_temperature
/// [`read_register`]: Mlx90614::read_register
/// [`release`]: Mlx90614::release
#[derive(Debug)]
pub struct Mlx90614<I2C, D> {
    /// The I²C bus this sensor is accessible on.
    bus: I2C,

    /// The I²C address this sensor is accessible at.
    address: u8,

    /// Delay provider used to pause between failed read attempts.
    delay: D,

    /// Total number of read transactions to attempt before surfacing an
    /// error. Always at least 1.
    comm_retries: u8,
}

impl<I2C, D> Mlx90614<I2C, D>
where
    I2C: i2c::WriteRead,
    D: DelayMs<u16>,
{
    /// Create a driver for the sensor at the given I²C address.
    ///
    /// The default communication settings are used: up to five read attempts
    /// per register, 100 ms apart. The delay provider is what performs that
    /// pause (on Linux, `linux_embedded_hal::Delay` works).
    pub fn new(bus: I2C, delay: D, address: u8) -> Self {
        Self {
            bus,
            address,
            delay,
            comm_retries: DEFAULT_COMM_RETRIES,
        }
    }

    /// Create a driver that attempts each register read `comm_retries` times.
    ///
    /// `comm_retries` is the *total* number of attempts, not the number of
    /// retries after the first failure. A configuration that would never
    /// touch the bus is invalid: passing 0 fails with
    /// [`LibraryError::NoReadAttempts`].
    pub fn with_comm_retries(
        bus: I2C,
        delay: D,
        address: u8,
        comm_retries: u8,
    ) -> Result<Self, Error<I2C>> {
        if comm_retries == 0 {
            return Err(LibraryError::NoReadAttempts.into());
        }
        Ok(Self {
            bus,
            address,
            delay,
            comm_retries,
        })
    }

    /// Read a 16-bit register, retrying failed transactions.
    ///
    /// Each attempt is a single word-read transaction. The first attempt that
    /// succeeds returns immediately; a failed attempt is followed by a 100 ms
    /// pause before the next one, with no pause after the last. If every
    /// attempt fails, the error of the final attempt is the one returned, and
    /// the errors of earlier attempts are discarded.
    pub fn read_register(&mut self, register: Register) -> Result<u16, Error<I2C>> {
        // comm_retries is at least 1, so the final attempt below always runs.
        for _ in 1..self.comm_retries {
            match read_word(&mut self.bus, self.address, register) {
                Ok(word) => return Ok(word),
                Err(_) => self.delay.delay_ms(RETRY_DELAY_MS),
            }
        }
        read_word(&mut self.bus, self.address, register).map_err(Error::I2cError)
    }

    /// The ambient temperature in degrees Celsius.
    ///
    /// This is the temperature of the sensor die itself, not of whatever is
    /// in front of it.
    pub fn ambient_temperature(&mut self) -> Result<f32, Error<I2C>> {
        let raw = self.read_register(Register::AmbientTemperature)?;
        Ok(raw_to_celsius(raw))
    }

    /// The object temperature in degrees Celsius, as seen by the primary IR
    /// channel.
    pub fn object_temperature(&mut self) -> Result<f32, Error<I2C>> {
        let raw = self.read_register(Register::Object1Temperature)?;
        Ok(raw_to_celsius(raw))
    }

    /// Destroy the driver, handing back the I²C bus and the delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.bus, self.delay)
    }
}

/// Perform a single word-read transaction.
///
/// The sensor takes a 1-byte command selecting the register and answers with
/// the 16-bit contents, most significant byte first.
fn read_word<I2C>(bus: &mut I2C, i2c_address: u8, register: Register) -> Result<u16, I2C::Error>
where
    I2C: i2c::WriteRead,
{
    let mut word_bytes = [0u8; 2];
    bus.write_read(i2c_address, &[register.address()], &mut word_bytes)?;
    Ok(u16::from_be_bytes(word_bytes))
}
