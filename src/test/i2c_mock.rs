// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
extern crate alloc;

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell};

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

use crate::register::Register;

/// The number of words in each of the sensor's address spaces.
///
/// RAM occupies commands 0x00 through 0x1F, the EEPROM commands 0x20 through
/// 0x3F. Each command addresses one 16-bit word.
const ADDRESS_SPACE_WORDS: usize = 0x20;

const EEPROM_BASE: u8 = 0x20;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MockError {
    /// A scripted transaction failure.
    ///
    /// The tag is chosen by the test that scripted the failure, so the errors
    /// of individual attempts can be told apart.
    Scripted(usize),

    /// An unknown I2C address was given.
    UnknownI2cAddress(u8),

    /// The given command is outside the sensor's RAM and EEPROM address
    /// spaces.
    UnknownRegisterAddress(u8),

    /// The requested operation doesn't match the sensor's transaction shape.
    ///
    /// Every transaction with the real device is a 1-byte command write
    /// followed by a word-sized read.
    IllegalOperation,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum I2cOperation {
    Read { command: u8, length: usize },
}

/// A mock MLX90614 on a mock I²C bus.
///
/// The internals are shared through `Rc<RefCell<…>>`, so cloning the mock
/// before moving it into a driver leaves the test with a handle for scripting
/// failures and inspecting the performed operations afterwards.
#[derive(Clone, Debug)]
pub(crate) struct MockSensorBus {
    i2c_address: u8,
    ram: Rc<RefCell<[u16; ADDRESS_SPACE_WORDS]>>,
    eeprom: Rc<RefCell<[u16; ADDRESS_SPACE_WORDS]>>,
    scripted_errors: Rc<RefCell<VecDeque<MockError>>>,
    recent_operations: Rc<RefCell<Vec<I2cOperation>>>,
}

impl MockSensorBus {
    pub(crate) fn new(i2c_address: u8) -> Self {
        Self {
            i2c_address,
            ram: Rc::new(RefCell::new([0u16; ADDRESS_SPACE_WORDS])),
            eeprom: Rc::new(RefCell::new([0u16; ADDRESS_SPACE_WORDS])),
            scripted_errors: Rc::new(RefCell::new(VecDeque::new())),
            recent_operations: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Store a word at the given register, in whichever address space it
    /// belongs to.
    pub(crate) fn set_word(&mut self, register: Register, value: u16) {
        let address = register.address();
        if register.is_eeprom() {
            self.eeprom.borrow_mut()[(address - EEPROM_BASE) as usize] = value;
        } else {
            self.ram.borrow_mut()[address as usize] = value;
        }
    }

    /// Access the word addressed by a raw command byte.
    fn get(&self, command: u8) -> Result<u16, MockError> {
        match command {
            0x00..=0x1F => Ok(self.ram.borrow()[command as usize]),
            0x20..=0x3F => Ok(self.eeprom.borrow()[(command - EEPROM_BASE) as usize]),
            _ => Err(MockError::UnknownRegisterAddress(command)),
        }
    }

    /// Queue an error to be returned instead of data.
    ///
    /// Scripted errors are consumed in order, one per transaction, before any
    /// data is served. The transaction is still recorded as an operation.
    pub(crate) fn script_error(&mut self, error: MockError) {
        self.scripted_errors.borrow_mut().push_back(error);
    }

    fn add_operation(&self, operation: I2cOperation) {
        self.recent_operations.borrow_mut().push(operation);
    }

    pub(crate) fn recent_operations(&self) -> Ref<Vec<I2cOperation>> {
        self.recent_operations.borrow()
    }
}

impl i2c::WriteRead for MockSensorBus {
    type Error = MockError;

    fn write_read(
        &mut self,
        i2c_address: u8,
        write_buffer: &[u8],
        out_buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        if i2c_address != self.i2c_address {
            return Err(MockError::UnknownI2cAddress(i2c_address));
        }
        // The command is a single byte, and the data behind it is a single
        // word.
        if write_buffer.len() != 1 || out_buffer.len() != 2 {
            return Err(MockError::IllegalOperation);
        }
        let command = write_buffer[0];
        self.add_operation(I2cOperation::Read {
            command,
            length: out_buffer.len(),
        });
        if let Some(error) = self.scripted_errors.borrow_mut().pop_front() {
            return Err(error);
        }
        let word = self.get(command)?;
        out_buffer.copy_from_slice(&word.to_be_bytes());
        Ok(())
    }
}

/// A delay provider that records requested pauses instead of sleeping.
///
/// Like [`MockSensorBus`], the record is shared between clones so a test can
/// keep a handle after moving the delay into a driver.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockDelay {
    sleeps: Rc<RefCell<Vec<u16>>>,
}

impl MockDelay {
    /// Every pause requested so far, in request order.
    pub(crate) fn sleeps(&self) -> Ref<Vec<u16>> {
        self.sleeps.borrow()
    }
}

impl DelayMs<u16> for MockDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.sleeps.borrow_mut().push(ms);
    }
}

/// A mock sensor preloaded with plausible measurement and ID words.
pub(crate) fn mock_sensor_at_address(i2c_address: u8) -> MockSensorBus {
    let mut bus = MockSensorBus::new(i2c_address);
    // 13657 * 0.02 - 273.15 = -0.01 °C
    bus.set_word(Register::AmbientTemperature, 13657);
    // 16657 * 0.02 - 273.15 = 59.99 °C
    bus.set_word(Register::Object1Temperature, 16657);
    // 14907 * 0.02 - 273.15 = 24.99 °C
    bus.set_word(Register::Object2Temperature, 14907);
    bus.set_word(Register::Id1, 0x2368);
    bus
}
