use crate::RdfWriteError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Concrete RDF syntaxes the converter can write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RdfFormat {
    NTriples,
    #[default]
    Turtle,
    RdfXml,
}

impl RdfFormat {
    pub const ALL: [RdfFormat; 3] = [RdfFormat::NTriples, RdfFormat::Turtle, RdfFormat::RdfXml];

    /// Accepts the short names (`nt`, `ttl`, `rdf`) and the long aliases
    /// (`ntriples`, `n-triples`, `turtle`, `xml`, `rdfxml`, `rdf/xml`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "nt" | "ntriples" | "n-triples" => Some(RdfFormat::NTriples),
            "ttl" | "turtle" => Some(RdfFormat::Turtle),
            "rdf" | "xml" | "rdfxml" | "rdf/xml" | "owl" => Some(RdfFormat::RdfXml),
            _ => None,
        }
    }

    /// Guess the format from an output file name.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_name(ext)
    }

    pub fn extension(self) -> &'static str {
        match self {
            RdfFormat::NTriples => "nt",
            RdfFormat::Turtle => "ttl",
            RdfFormat::RdfXml => "rdf",
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RdfFormat::NTriples => "N-Triples",
            RdfFormat::Turtle => "Turtle",
            RdfFormat::RdfXml => "RDF/XML",
        };
        f.write_str(name)
    }
}

impl FromStr for RdfFormat {
    type Err = RdfWriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RdfWriteError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_aliases_resolve() {
        assert_eq!(RdfFormat::from_name("nt"), Some(RdfFormat::NTriples));
        assert_eq!(RdfFormat::from_name("Turtle"), Some(RdfFormat::Turtle));
        assert_eq!(RdfFormat::from_name("xml"), Some(RdfFormat::RdfXml));
        assert_eq!(RdfFormat::from_name("rdfxml"), Some(RdfFormat::RdfXml));
        assert_eq!(RdfFormat::from_name("json"), None);
        assert!("nquads".parse::<RdfFormat>().is_err());
    }

    #[test]
    fn extension_round_trips_through_from_extension() {
        for format in RdfFormat::ALL {
            let file = format!("out.{}", format.extension());
            assert_eq!(RdfFormat::from_extension(Path::new(&file)), Some(format));
        }
        assert_eq!(RdfFormat::from_extension(Path::new("out")), None);
        assert_eq!(RdfFormat::default(), RdfFormat::Turtle);
    }
}
