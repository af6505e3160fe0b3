#![allow(unused)]

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($tt)*);
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($tt)*);
    };
}

pub(crate) use {debug, trace, warning};
