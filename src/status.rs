use std::{fmt::Display, ops::{BitAnd, BitOr, BitOrAssign}};

/// Accumulated outcome of a validation pass. Every check that fails sets its
/// own bit, so a single value reports all problems found in one call.
///
/// Every bit except [`Status::LON_WARNING`] is an error; the warning only
/// signals reduced accuracy and the output it accompanies is still usable.
///
/// # Usage
///
/// ```
/// use tranmerc::Status;
///
/// let status = Status::LAT_ERROR | Status::LON_WARNING;
///
/// assert!(status.contains(Status::LAT_ERROR));
/// assert!(status.is_fatal());
/// assert_eq!(status.bits(), 0x0201);
/// assert_eq!(status.to_string(), "LAT_ERROR | LON_WARNING");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Status(u16);

impl Status {
    pub const NO_ERROR: Status = Status(0x0000);
    pub const LAT_ERROR: Status = Status(0x0001);
    pub const LON_ERROR: Status = Status(0x0002);
    pub const EASTING_ERROR: Status = Status(0x0004);
    pub const NORTHING_ERROR: Status = Status(0x0008);
    pub const ORIGIN_LAT_ERROR: Status = Status(0x0010);
    pub const CENT_MER_ERROR: Status = Status(0x0020);
    pub const A_ERROR: Status = Status(0x0040);
    pub const INV_F_ERROR: Status = Status(0x0080);
    pub const SCALE_FACTOR_ERROR: Status = Status(0x0100);
    pub const LON_WARNING: Status = Status(0x0200);

    const ALL: Status = Status(0x03ff);

    const NAMES: [(Status, &'static str); 10] = [
        (Status::LAT_ERROR, "LAT_ERROR"),
        (Status::LON_ERROR, "LON_ERROR"),
        (Status::EASTING_ERROR, "EASTING_ERROR"),
        (Status::NORTHING_ERROR, "NORTHING_ERROR"),
        (Status::ORIGIN_LAT_ERROR, "ORIGIN_LAT_ERROR"),
        (Status::CENT_MER_ERROR, "CENT_MER_ERROR"),
        (Status::A_ERROR, "A_ERROR"),
        (Status::INV_F_ERROR, "INV_F_ERROR"),
        (Status::SCALE_FACTOR_ERROR, "SCALE_FACTOR_ERROR"),
        (Status::LON_WARNING, "LON_WARNING"),
    ];

    /// Raw bitmask value.
    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Builds a status from a raw bitmask. Returns `None` if any bit outside
    /// the defined flags is set.
    ///
    /// ```
    /// use tranmerc::Status;
    ///
    /// assert_eq!(Status::from_bits(0x0011), Some(Status::LAT_ERROR | Status::ORIGIN_LAT_ERROR));
    /// assert_eq!(Status::from_bits(0x8000), None);
    /// ```
    pub const fn from_bits(bits: u16) -> Option<Status> {
        if bits & !Status::ALL.0 == 0 {
            Some(Status(bits))
        } else {
            None
        }
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(&self, other: Status) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bit at all is set, warnings included.
    pub const fn is_ok(&self) -> bool {
        self.0 == 0
    }

    /// Whether any error bit is set. [`Status::LON_WARNING`] alone is not fatal.
    pub const fn is_fatal(&self) -> bool {
        self.0 & !Status::LON_WARNING.0 != 0
    }

    /// Iterates over the individual flags that are set, lowest bit first.
    pub fn iter(&self) -> impl Iterator<Item = Status> + '_ {
        Status::NAMES
            .iter()
            .map(|(flag, _)| *flag)
            .filter(move |flag| self.contains(*flag))
    }
}

impl BitOr for Status {
    type Output = Status;

    fn bitor(self, rhs: Status) -> Status {
        Status(self.0 | rhs.0)
    }
}

impl BitOrAssign for Status {
    fn bitor_assign(&mut self, rhs: Status) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Status {
    type Output = Status;

    fn bitand(self, rhs: Status) -> Status {
        Status(self.0 & rhs.0)
    }
}

impl From<Status> for u16 {
    fn from(value: Status) -> u16 {
        value.0
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_ok() {
            return write!(f, "NO_ERROR");
        }

        let mut first = true;
        for (flag, name) in &Status::NAMES {
            if self.contains(*flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accumulate() {
        let mut status = Status::NO_ERROR;
        assert!(status.is_ok());
        assert!(!status.is_fatal());

        status |= Status::A_ERROR;
        status |= Status::SCALE_FACTOR_ERROR;

        assert_eq!(status.bits(), 0x0140);
        assert!(status.contains(Status::A_ERROR));
        assert!(!status.contains(Status::INV_F_ERROR));
        assert_eq!(status.iter().collect::<Vec<_>>(), vec![Status::A_ERROR, Status::SCALE_FACTOR_ERROR]);
    }

    #[test]
    fn warning_alone_is_not_fatal() {
        let status = Status::LON_WARNING;
        assert!(!status.is_ok());
        assert!(!status.is_fatal());
        assert!((status | Status::EASTING_ERROR).is_fatal());
    }

    #[test]
    fn display_names_each_flag() {
        assert_eq!(Status::NO_ERROR.to_string(), "NO_ERROR");
        assert_eq!(
            (Status::NORTHING_ERROR | Status::EASTING_ERROR).to_string(),
            "EASTING_ERROR | NORTHING_ERROR",
        );
    }

    #[test]
    fn bits_match_bitmask_layout() {
        let layout = [
            (Status::LAT_ERROR, 0x0001),
            (Status::LON_ERROR, 0x0002),
            (Status::EASTING_ERROR, 0x0004),
            (Status::NORTHING_ERROR, 0x0008),
            (Status::ORIGIN_LAT_ERROR, 0x0010),
            (Status::CENT_MER_ERROR, 0x0020),
            (Status::A_ERROR, 0x0040),
            (Status::INV_F_ERROR, 0x0080),
            (Status::SCALE_FACTOR_ERROR, 0x0100),
            (Status::LON_WARNING, 0x0200),
        ];

        for (flag, bits) in layout {
            assert_eq!(u16::from(flag), bits);
            assert_eq!(Status::from_bits(bits), Some(flag));
        }
    }
}
