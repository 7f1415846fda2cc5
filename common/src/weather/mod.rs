// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod weathersource;
mod dummyweathersource;

pub use weathersource::WeatherSource;

pub use dummyweathersource::DummyWeatherSource;
