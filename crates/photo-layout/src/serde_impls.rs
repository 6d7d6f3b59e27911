//! Serde support for the size enums.
//!
//! Named sizes serialize as their catalog key (`"4x6"`, `"Letter"`); custom
//! sizes serialize as a `{ width_in, height_in }` map.

use crate::types::{PaperSize, PrintSize};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

fn custom_dimensions<'de, M>(mut map: M) -> Result<(f64, f64), M::Error>
where
    M: MapAccess<'de>,
{
    let mut width_in = None;
    let mut height_in = None;

    while let Some(key) = map.next_key::<String>()? {
        match key.as_str() {
            "width_in" => width_in = Some(map.next_value()?),
            "height_in" => height_in = Some(map.next_value()?),
            _ => {
                let _: de::IgnoredAny = map.next_value()?;
            }
        }
    }

    match (width_in, height_in) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(de::Error::missing_field("width_in or height_in")),
    }
}

impl Serialize for PrintSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PrintSize::Custom {
                width_in,
                height_in,
            } => {
                let mut s = serializer.serialize_struct("Custom", 2)?;
                s.serialize_field("width_in", width_in)?;
                s.serialize_field("height_in", height_in)?;
                s.end()
            }
            named => serializer.serialize_str(&named.name()),
        }
    }
}

impl<'de> Deserialize<'de> for PrintSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PrintSizeVisitor;

        impl<'de> Visitor<'de> for PrintSizeVisitor {
            type Value = PrintSize;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a print size name or { width_in, height_in }")
            }

            fn visit_str<E>(self, value: &str) -> Result<PrintSize, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }

            fn visit_map<M>(self, map: M) -> Result<PrintSize, M::Error>
            where
                M: MapAccess<'de>,
            {
                let (w, h) = custom_dimensions(map)?;
                PrintSize::custom(w, h).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(PrintSizeVisitor)
    }
}

impl Serialize for PaperSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PaperSize::A3 => serializer.serialize_str("A3"),
            PaperSize::A4 => serializer.serialize_str("A4"),
            PaperSize::A5 => serializer.serialize_str("A5"),
            PaperSize::Letter => serializer.serialize_str("Letter"),
            PaperSize::Legal => serializer.serialize_str("Legal"),
            PaperSize::Tabloid => serializer.serialize_str("Tabloid"),
            PaperSize::Custom {
                width_in,
                height_in,
            } => {
                let mut s = serializer.serialize_struct("Custom", 2)?;
                s.serialize_field("width_in", width_in)?;
                s.serialize_field("height_in", height_in)?;
                s.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PaperSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PaperSizeVisitor;

        impl<'de> Visitor<'de> for PaperSizeVisitor {
            type Value = PaperSize;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a paper size")
            }

            fn visit_str<E>(self, value: &str) -> Result<PaperSize, E>
            where
                E: de::Error,
            {
                match value {
                    "A3" => Ok(PaperSize::A3),
                    "A4" => Ok(PaperSize::A4),
                    "A5" => Ok(PaperSize::A5),
                    "Letter" => Ok(PaperSize::Letter),
                    "Legal" => Ok(PaperSize::Legal),
                    "Tabloid" => Ok(PaperSize::Tabloid),
                    _ => Err(de::Error::unknown_variant(
                        value,
                        &["A3", "A4", "A5", "Letter", "Legal", "Tabloid", "Custom"],
                    )),
                }
            }

            fn visit_map<M>(self, map: M) -> Result<PaperSize, M::Error>
            where
                M: MapAccess<'de>,
            {
                let (width_in, height_in) = custom_dimensions(map)?;
                Ok(PaperSize::Custom {
                    width_in,
                    height_in,
                })
            }
        }

        deserializer.deserialize_any(PaperSizeVisitor)
    }
}
