//! Battery selection and dispatch.
//!
//! The batteries themselves live in TestU01 and are only linked when the
//! `testu01` feature is enabled. They receive the adapter through a
//! [`hexgate::ffi::Binding`] and pull every value through its callbacks.

use core::fmt;
use std::io::BufRead;

use hexgate::StreamRng;

/// The predefined TestU01 batteries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Battery {
    SmallCrush,
    #[default]
    Crush,
    BigCrush,
}

impl Battery {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SmallCrush => "SmallCrush",
            Self::Crush => "Crush",
            Self::BigCrush => "BigCrush",
        }
    }
}

impl fmt::Display for Battery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "testu01")]
mod testu01 {
    use hexgate::ffi::Unif01Gen;

    #[allow(non_snake_case)]
    unsafe extern "C" {
        pub fn bbattery_SmallCrush(generator: *mut Unif01Gen);
        pub fn bbattery_Crush(generator: *mut Unif01Gen);
        pub fn bbattery_BigCrush(generator: *mut Unif01Gen);
    }
}

/// Runs `battery` to completion on `rng`. The report is printed on stdout by
/// TestU01.
///
/// A failed refill during the run terminates the process through the
/// adapter's fatal handler.
#[cfg(feature = "testu01")]
pub fn run_battery<R: BufRead>(battery: Battery, rng: &mut StreamRng<R>) -> anyhow::Result<()> {
    use hexgate::ffi::Binding;

    let name = rng.name().to_owned();
    let mut binding = Binding::new(rng, &name)?;
    let generator = binding.as_mut_ptr();

    tracing::info!(%battery, name = %name, "running battery");

    // SAFETY: `binding` outlives the call and TestU01 only invokes the
    // callbacks from this thread, before returning.
    unsafe {
        match battery {
            Battery::SmallCrush => testu01::bbattery_SmallCrush(generator),
            Battery::Crush => testu01::bbattery_Crush(generator),
            Battery::BigCrush => testu01::bbattery_BigCrush(generator),
        }
    }

    Ok(())
}

#[cfg(not(feature = "testu01"))]
pub fn run_battery<R: BufRead>(battery: Battery, _rng: &mut StreamRng<R>) -> anyhow::Result<()> {
    anyhow::bail!(
        "cannot run {battery}: this binary was built without the `testu01` feature, so no battery is linked"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_names_match_testu01() {
        assert_eq!(Battery::SmallCrush.to_string(), "SmallCrush");
        assert_eq!(Battery::Crush.to_string(), "Crush");
        assert_eq!(Battery::BigCrush.to_string(), "BigCrush");
        assert_eq!(Battery::default(), Battery::Crush);
    }

    #[cfg(not(feature = "testu01"))]
    #[test]
    fn running_without_linked_battery_fails_before_reading() {
        let mut rng = StreamRng::from_reader(&b""[..]);

        let err = run_battery(Battery::SmallCrush, &mut rng).unwrap_err();

        assert!(err.to_string().contains("SmallCrush"), "{err}");
        assert_eq!(rng.served(), 0);
        assert!(rng.is_exhausted());
    }
}
