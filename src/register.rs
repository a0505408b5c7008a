// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The registers of the MLX90614, as accessed over I²C.
///
/// The sensor exposes two address spaces, selected by the upper bits of the
/// command byte: RAM (commands 0x00 through 0x1F) holds the measurement
/// results, while the EEPROM (commands 0x20 through 0x3F) holds the
/// configuration and identification data. Every location in both spaces is a
/// single 16-bit word, transferred most significant byte first.
///
/// Only [`AmbientTemperature`][Register::AmbientTemperature] and
/// [`Object1Temperature`][Register::Object1Temperature] are read by the
/// temperature methods on [`Mlx90614`][crate::Mlx90614]; the rest of the map
/// is listed for completeness (and for raw access through
/// [`read_register`][crate::Mlx90614::read_register]).
// NOTE: To make it easier to compare against the datasheet, discriminant values should *always* be
// explicitly written out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Register {
    /// Raw data from IR channel 1.
    RawIr1 = 0x04,

    /// Raw data from IR channel 2.
    RawIr2 = 0x05,

    /// Ambient temperature, meaning the temperature of the sensor die.
    AmbientTemperature = 0x06,

    /// Object temperature as seen by IR channel 1.
    Object1Temperature = 0x07,

    /// Object temperature as seen by IR channel 2.
    ///
    /// Only dual-zone variants of the sensor report anything useful here.
    Object2Temperature = 0x08,

    /// Upper bound of the object temperature range.
    ObjectTemperatureMax = 0x20,

    /// Lower bound of the object temperature range.
    ObjectTemperatureMin = 0x21,

    /// PWM output configuration.
    PwmControl = 0x22,

    /// Ambient temperature range.
    AmbientTemperatureRange = 0x23,

    /// Emissivity correction coefficient.
    Emissivity = 0x24,

    /// Configuration register.
    Config = 0x25,

    /// The I²C address the sensor responds at.
    SlaveAddress = 0x2E,

    /// First ID register. Read-only.
    Id1 = 0x3C,

    /// Second ID register. Read-only.
    Id2 = 0x3D,

    /// Third ID register. Read-only.
    Id3 = 0x3E,

    /// Fourth ID register. Read-only.
    Id4 = 0x3F,
}

impl Register {
    /// The first command of the EEPROM address space. Everything below it is
    /// RAM.
    const EEPROM_BASE: u8 = 0x20;

    /// The command byte addressing this register.
    pub fn address(self) -> u8 {
        u8::from(self)
    }

    /// The width in bytes of the data at this register.
    ///
    /// Both address spaces hold nothing but 16-bit words, so this is always
    /// two.
    pub fn width(self) -> usize {
        2
    }

    /// Is this register in the RAM address space?
    pub fn is_ram(self) -> bool {
        self.address() < Self::EEPROM_BASE
    }

    /// Is this register in the EEPROM address space?
    pub fn is_eeprom(self) -> bool {
        !self.is_ram()
    }
}
