#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechItem {
    pub name: &'static str,
    /// Simple Icons slug, also the key for icon fallbacks.
    pub slug: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechGroup {
    pub title: &'static str,
    pub items: &'static [TechItem],
}

const fn item(name: &'static str, slug: &'static str, url: &'static str) -> TechItem {
    TechItem { name, slug, url }
}

pub const TECH_GROUPS: &[TechGroup] = &[
    TechGroup {
        title: "Languages",
        items: &[
            item("Python", "python", "https://www.python.org/"),
            item("JavaScript", "javascript", "https://developer.mozilla.org/en-US/docs/Web/JavaScript"),
            item(".NET / C#", "dotnet", "https://learn.microsoft.com/en-us/dotnet/csharp/"),
            item("ABAP", "sap", "https://help.sap.com/docs/abap-platform"),
            item("SQL", "postgresql", "https://en.wikipedia.org/wiki/SQL"),
            item("HTML", "html5", "https://developer.mozilla.org/en-US/docs/Web/HTML"),
            item("CSS", "css3", "https://developer.mozilla.org/en-US/docs/Web/CSS"),
        ],
    },
    TechGroup {
        title: "SAP & Enterprise",
        items: &[
            item("SAP S/4HANA", "sap", "https://www.sap.com/products/erp/s4hana.html"),
            item("SAP ERP", "sap", "https://www.sap.com/products/erp.html"),
            item("SAP Fiori", "sap", "https://www.sap.com/products/technology-platform/fiori.html"),
            item("SAP UI5", "sap", "https://ui5.sap.com/"),
            item("SAP BTP", "sap", "https://www.sap.com/products/technology-platform.html"),
            item("SAP MM", "sap", "https://help.sap.com/docs/SAP_ERP"),
            item("SAP SD", "sap", "https://help.sap.com/docs/SAP_ERP"),
        ],
    },
    TechGroup {
        title: "Frameworks & Machine Learning",
        items: &[
            item("React", "react", "https://react.dev/"),
            item("PyTorch", "pytorch", "https://pytorch.org/"),
            item("TensorFlow", "tensorflow", "https://www.tensorflow.org/"),
            item("scikit-learn", "scikitlearn", "https://scikit-learn.org/"),
            item("OpenCV", "opencv", "https://opencv.org/"),
        ],
    },
    TechGroup {
        title: "Data & Databases",
        items: &[
            item("PostgreSQL", "postgresql", "https://www.postgresql.org/"),
            item("MySQL", "mysql", "https://www.mysql.com/"),
            item("MongoDB", "mongodb", "https://www.mongodb.com/"),
            item("Pandas", "pandas", "https://pandas.pydata.org/"),
            item("NumPy", "numpy", "https://numpy.org/"),
        ],
    },
    TechGroup {
        title: "DevOps & Infrastructure",
        items: &[
            item("Docker", "docker", "https://www.docker.com/"),
            item("Azure", "microsoftazure", "https://azure.microsoft.com/"),
            item("Linux", "linux", "https://www.linux.org/"),
            item("Git", "git", "https://git-scm.com/"),
            item("GitHub", "github", "https://github.com/"),
        ],
    },
    TechGroup {
        title: "Development Tools",
        items: &[
            item("VS Code", "visualstudiocode", "https://code.visualstudio.com/"),
            item("IntelliJ", "intellijidea", "https://www.jetbrains.com/idea/"),
            item("Jupyter", "jupyter", "https://jupyter.org/"),
            item("Postman", "postman", "https://www.postman.com/"),
        ],
    },
    TechGroup {
        title: "AI & Platforms",
        items: &[
            item("Hugging Face", "huggingface", "https://huggingface.co/"),
            item("OpenAI", "openai", "https://openai.com/"),
        ],
    },
];

/// Entry of the compact icon-font skill strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon_class: &'static str,
}

const fn skill(name: &'static str, icon_class: &'static str) -> Skill {
    Skill { name, icon_class }
}

pub const SKILLS: &[Skill] = &[
    skill("JavaScript", "devicon-javascript-plain"),
    skill("TypeScript", "devicon-typescript-plain"),
    skill("HTML", "devicon-html5-plain"),
    skill("CSS", "devicon-css3-plain"),
    skill("React", "devicon-react-original"),
    skill("Node.js", "devicon-nodejs-plain"),
    skill("Python", "devicon-python-plain"),
    skill("Git", "devicon-git-plain"),
    skill("GitHub", "devicon-github-original"),
    skill("Docker", "devicon-docker-plain"),
    skill("PostgreSQL", "devicon-postgresql-plain"),
    skill("SAP", "devicon-sap-plain"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_are_populated() {
        assert_eq!(TECH_GROUPS.len(), 7);
        assert!(TECH_GROUPS.iter().all(|g| !g.items.is_empty()));
        assert!(TECH_GROUPS
            .iter()
            .flat_map(|g| g.items.iter())
            .all(|i| i.url.starts_with("https://") && !i.slug.is_empty()));
    }
}
