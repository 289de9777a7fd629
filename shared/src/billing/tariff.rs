//! Statutory inspection fees per vehicle category.

/// Vehicle category recognized by the inspection tariff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleCategory {
    Motorcycle,
    Car,
    Unspecified,
}

impl VehicleCategory {
    /// Match the exact Thai label used on the intake form. Anything
    /// else (including "" while the form is blank) is Unspecified.
    pub fn from_label(label: &str) -> Self {
        match label {
            "มอไซค์" => VehicleCategory::Motorcycle,
            "รถยนต์" => VehicleCategory::Car,
            _ => VehicleCategory::Unspecified,
        }
    }

    /// Inspection fee in baht.
    pub fn inspection_fee(self) -> f64 {
        match self {
            VehicleCategory::Motorcycle => 60.0,
            VehicleCategory::Car => 200.0,
            VehicleCategory::Unspecified => 0.0,
        }
    }
}

/// Fee for a raw category label, in one step.
pub fn inspection_fee(label: &str) -> f64 {
    VehicleCategory::from_label(label).inspection_fee()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tariff_by_label() {
        assert_eq!(inspection_fee("มอไซค์"), 60.0);
        assert_eq!(inspection_fee("รถยนต์"), 200.0);
        assert_eq!(inspection_fee(""), 0.0);
        assert_eq!(inspection_fee("รถบรรทุก"), 0.0);
    }

    #[test]
    fn unknown_labels_are_unspecified() {
        assert_eq!(VehicleCategory::from_label("ghost"), VehicleCategory::Unspecified);
    }
}
