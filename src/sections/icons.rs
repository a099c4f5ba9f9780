/// Icon shown next to a technology name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechIcon {
    Html5,
    Css3,
    JavaScript,
    React,
    NodeJs,
    Npm,
    MySql,
    MongoDb,
    Java,
    Bootstrap,
    Python,
    /// Fallback for anything without a dedicated icon
    Data,
}

/// The "What I do" grid: technology name and its display label
pub const FEATURED_TECHNOLOGIES: &[(&str, &str)] = &[
    ("HTML", "html-5"),
    ("CSS", "css3"),
    ("JavaScript", "JavaScript"),
    ("React.js", "reactjs"),
    ("Node.js", "nodejs"),
    ("NPM", "npm"),
    ("SQL", "sql-database"),
    ("Java", "java"),
    ("Python", "python"),
    ("Bootstrap", "bootstrap"),
];

impl TechIcon {
    /// Look up the icon for a technology name. Names are matched exactly.
    pub fn for_name(name: &str) -> Self {
        match name {
            "HTML" => Self::Html5,
            "CSS" => Self::Css3,
            "JavaScript" => Self::JavaScript,
            "React.js" => Self::React,
            "Node.js" | "Express.js" => Self::NodeJs,
            "NPM" => Self::Npm,
            "SQL" => Self::MySql,
            "MongoDB" => Self::MongoDb,
            "Java" => Self::Java,
            "Bootstrap" => Self::Bootstrap,
            "Python" => Self::Python,
            _ => Self::Data,
        }
    }

    /// Short terminal badge standing in for the graphic
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Html5 => "[HTML]",
            Self::Css3 => "[CSS]",
            Self::JavaScript => "[JS]",
            Self::React => "[REACT]",
            Self::NodeJs => "[NODE]",
            Self::Npm => "[NPM]",
            Self::MySql => "[SQL]",
            Self::MongoDb => "[MONGO]",
            Self::Java => "[JAVA]",
            Self::Bootstrap => "[BS]",
            Self::Python => "[PY]",
            Self::Data => "[DATA]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(TechIcon::for_name("React.js"), TechIcon::React);
        assert_eq!(TechIcon::for_name("SQL"), TechIcon::MySql);
        assert_eq!(TechIcon::for_name("MongoDB"), TechIcon::MongoDb);
    }

    #[test]
    fn test_express_shares_node_icon() {
        assert_eq!(TechIcon::for_name("Express.js"), TechIcon::NodeJs);
        assert_eq!(TechIcon::for_name("Node.js"), TechIcon::NodeJs);
    }

    #[test]
    fn test_unknown_and_c_fall_back_to_data() {
        assert_eq!(TechIcon::for_name("C"), TechIcon::Data);
        assert_eq!(TechIcon::for_name("Rust"), TechIcon::Data);
        assert_eq!(TechIcon::for_name("react.js"), TechIcon::Data);
        assert_eq!(TechIcon::for_name("").badge(), "[DATA]");
    }

    #[test]
    fn test_every_featured_technology_has_an_icon() {
        for (name, _) in FEATURED_TECHNOLOGIES {
            assert_ne!(TechIcon::for_name(name), TechIcon::Data, "{name}");
        }
    }
}
