//! Localized compass direction names.
//!
//! Labels are looked up by locale and by the same sector index that
//! [`qibla_geo::compass_label`] computes. The locale is always passed in; there
//! is no process-wide language setting.

use qibla_geo::sector_index;
use qibla_types::{CompassDirection, Locale, QiblaResult};

/// Eight direction names in [`CompassDirection::ALL`] order.
pub type LabelTable = [&'static str; 8];

const EN: LabelTable = [
    "North", "North-East", "East", "South-East", "South", "South-West", "West", "North-West",
];

const AR: LabelTable = [
    "شمال", "شمال شرق", "شرق", "جنوب شرق", "جنوب", "جنوب غرب", "غرب", "شمال غرب",
];

const FR: LabelTable = [
    "Nord", "Nord-Est", "Est", "Sud-Est", "Sud", "Sud-Ouest", "Ouest", "Nord-Ouest",
];

const ID: LabelTable = [
    "Utara", "Timur Laut", "Timur", "Tenggara", "Selatan", "Barat Daya", "Barat", "Barat Laut",
];

const TR: LabelTable = [
    "Kuzey", "Kuzeydoğu", "Doğu", "Güneydoğu", "Güney", "Güneybatı", "Batı", "Kuzeybatı",
];

const UR: LabelTable = [
    "شمال", "شمال مشرق", "مشرق", "جنوب مشرق", "جنوب", "جنوب مغرب", "مغرب", "شمال مغرب",
];

/// Label table for a locale.
pub fn labels(locale: Locale) -> &'static LabelTable {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
        Locale::Fr => &FR,
        Locale::Id => &ID,
        Locale::Tr => &TR,
        Locale::Ur => &UR,
    }
}

/// Name of `direction` in `locale`.
pub fn direction_name(locale: Locale, direction: CompassDirection) -> &'static str {
    labels(locale)[direction.index()]
}

/// Name of the compass sector containing `bearing_degrees`.
pub fn localize_bearing(locale: Locale, bearing_degrees: f64) -> &'static str {
    labels(locale)[sector_index(bearing_degrees)]
}

/// Renders user-facing text.
pub trait Localizer {
    fn direction(&self, direction: CompassDirection) -> &str;

    /// e.g. `"119.0° South-East, 4794 km"`.
    fn format_result(&self, result: &QiblaResult) -> String {
        format!(
            "{}° {}, {} km",
            result.display_bearing(),
            self.direction(result.compass),
            result.rounded_distance_km()
        )
    }
}

/// Table-backed localizer for one of the built-in locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableLocalizer {
    locale: Locale,
}

impl TableLocalizer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Localizer for TableLocalizer {
    fn direction(&self, direction: CompassDirection) -> &str {
        direction_name(self.locale, direction)
    }
}
