/// One row of the career timeline. The position in [`career_entries`] is
/// the entry's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerEntry {
    pub role: String,
    pub sub: String,
    pub year: String,
    pub desc: String,
}

impl CareerEntry {
    fn new(role: &str, sub: &str, year: &str, desc: &str) -> Self {
        Self {
            role: role.to_string(),
            sub: sub.to_string(),
            year: year.to_string(),
            desc: desc.to_string(),
        }
    }
}

/// The fixed timeline, newest first.
pub fn career_entries() -> Vec<CareerEntry> {
    vec![
        CareerEntry::new(
            "SAP Technical Consultant",
            "2BM · Client & internal projects",
            "NOW",
            "Working with ABAP, CDS, OData, and SAP Fiori/UI5. Building clean, maintainable SAP \
             solutions close to real business needs. Contributing to internal AI initiatives, \
             SAP Public Cloud setup, and quality assurance.",
        ),
        CareerEntry::new(
            "AI & Automation",
            "Internal projects",
            "2025",
            "Developing AI-driven tools to support consulting work. Hands-on with LLM-based \
             assistants, multi-agent systems, and practical automation. MSc in Computer Science \
             completed summer 2025.",
        ),
        CareerEntry::new(
            "Full-Stack Development",
            "Projects & tools",
            "2024",
            "Built complete web applications from frontend to backend. Focused on usability, \
             performance, and clear system design.",
        ),
        CareerEntry::new(
            "Python & Machine Learning",
            "Self-driven projects",
            "2023",
            "Worked with Python, data analysis, and machine learning. Built automation, \
             prototypes, and early ML-based solutions.",
        ),
        CareerEntry::new(
            "Technical & Visual Foundations",
            "Design & development crossover",
            "2022",
            "Combined technical thinking with visual design. Developed a strong sense for UX, \
             structure, and clarity.",
        ),
        CareerEntry::new(
            "Digital Foundations",
            "Getting started",
            "2021",
            "First exposure to structured digital tools and software. Sparked a long-term \
             interest in technology and problem-solving.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_newest_first() {
        let entries = career_entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].year, "NOW");
        let years: Vec<u32> = entries[1..].iter().map(|e| e.year.parse().unwrap()).collect();
        assert!(years.windows(2).all(|w| w[0] > w[1]));
    }
}
