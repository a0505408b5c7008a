// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
mod i2c_mock;

pub(crate) use i2c_mock::{
    mock_sensor_at_address, I2cOperation, MockDelay, MockError, MockSensorBus,
};
