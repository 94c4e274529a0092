//! Static table of offered services and their intake question schemas.

use shared::domain::{QuestionDefinition, QuestionOption, ServiceDefinition};

/// One service as shown on the landing grid.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub slug: &'static str,
    pub blurb: &'static str,
    pub definition: ServiceDefinition,
}

/// Immutable lookup table from service slug to definition, constructed once
/// at startup.
#[derive(Debug)]
pub struct ServiceCatalog {
    entries: Vec<CatalogEntry>,
    fallback: ServiceDefinition,
}

impl ServiceCatalog {
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                cv_creation(),
                cover_letters(),
                linkedin_setup(),
                email_signatures(),
                business_cards(),
                flyers_marketing(),
                phone_support(),
                laptop_support(),
            ],
            fallback: ServiceDefinition {
                title: "Service Request".to_string(),
                questions: Vec::new(),
            },
        }
    }

    /// Total lookup: unknown slugs resolve to a generic empty-question
    /// definition so the request modal always opens.
    pub fn lookup(&self, slug: &str) -> &ServiceDefinition {
        self.entries
            .iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| &entry.definition)
            .unwrap_or(&self.fallback)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Case-insensitive filter over card title and blurb; a blank query
    /// keeps every card visible.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                needle.is_empty()
                    || entry.definition.title.to_lowercase().contains(&needle)
                    || entry.blurb.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

fn opt(value: &str, label: &str) -> QuestionOption {
    QuestionOption::new(value, label)
}

fn cv_creation() -> CatalogEntry {
    CatalogEntry {
        slug: "cv-creation",
        blurb: "Tailored CVs and resumes written for your target role.",
        definition: ServiceDefinition {
            title: "CV Creation Service".to_string(),
            questions: vec![
                QuestionDefinition::single_select(
                    "What industry/field are you targeting?",
                    vec![
                        opt("tech", "Technology/IT"),
                        opt("finance", "Finance/Banking"),
                        opt("healthcare", "Healthcare"),
                        opt("education", "Education"),
                        opt("marketing", "Marketing/Sales"),
                        opt("engineering", "Engineering"),
                        opt("creative", "Creative/Design"),
                        opt("other", "Other"),
                    ],
                )
                .required(),
                QuestionDefinition::single_select(
                    "Current career level",
                    vec![
                        opt("student", "Student/Recent Graduate"),
                        opt("entry", "Entry Level (0-2 years)"),
                        opt("mid", "Mid Level (3-7 years)"),
                        opt("senior", "Senior Level (8+ years)"),
                        opt("executive", "Executive/Leadership"),
                    ],
                )
                .required(),
                QuestionDefinition::single_select(
                    "Do you have an existing CV/Resume?",
                    vec![
                        opt("none", "No, starting from scratch"),
                        opt("outdated", "Yes, but it needs major updates"),
                        opt("recent", "Yes, just needs minor tweaks"),
                    ],
                )
                .required(),
                QuestionDefinition::multi_select(
                    "Special requirements",
                    vec![
                        opt("ats", "ATS-optimized formatting"),
                        opt("creative", "Creative/visual design"),
                        opt("academic", "Academic format"),
                        opt("international", "International format"),
                        opt("portfolio", "Include portfolio section"),
                    ],
                ),
                QuestionDefinition::long_text("Tell us about your key achievements or experiences")
                    .with_placeholder(
                        "Briefly describe your main accomplishments, skills, or experiences \
                         you want highlighted...",
                    )
                    .required(),
            ],
        },
    }
}

fn cover_letters() -> CatalogEntry {
    CatalogEntry {
        slug: "cover-letters",
        blurb: "Persuasive cover letters matched to specific postings.",
        definition: ServiceDefinition {
            title: "Cover Letter Writing Service".to_string(),
            questions: vec![
                QuestionDefinition::single_select(
                    "Do you have a specific job posting in mind?",
                    vec![
                        opt("specific", "Yes, for a specific job application"),
                        opt("general", "No, I need a general template"),
                        opt("multiple", "Multiple positions in same field"),
                    ],
                )
                .required(),
                QuestionDefinition::short_text("Company name (if specific)")
                    .with_placeholder("Enter company name if applying to specific job"),
                QuestionDefinition::short_text("Job title/position")
                    .with_placeholder("e.g., Software Developer, Marketing Manager")
                    .required(),
                QuestionDefinition::long_text("What makes you interested in this role/company?")
                    .with_placeholder(
                        "Share your motivation and what attracts you to this opportunity...",
                    )
                    .required(),
                QuestionDefinition::long_text("Key skills/experiences to highlight")
                    .with_placeholder(
                        "What specific skills or experiences make you a great fit for this role?",
                    )
                    .required(),
                QuestionDefinition::single_select(
                    "Cover letter style preference",
                    vec![
                        opt("professional", "Professional/Formal"),
                        opt("conversational", "Conversational/Friendly"),
                        opt("creative", "Creative/Unique"),
                        opt("technical", "Technical/Detailed"),
                    ],
                )
                .required(),
            ],
        },
    }
}

fn linkedin_setup() -> CatalogEntry {
    CatalogEntry {
        slug: "linkedin-setup",
        blurb: "LinkedIn profiles built and optimized for visibility.",
        definition: ServiceDefinition {
            title: "LinkedIn Profile Setup".to_string(),
            questions: vec![
                QuestionDefinition::single_select(
                    "Do you have an existing LinkedIn profile?",
                    vec![
                        opt("none", "No, need to create from scratch"),
                        opt("basic", "Yes, but very basic/incomplete"),
                        opt("existing", "Yes, but needs optimization"),
                    ],
                )
                .required(),
                QuestionDefinition::single_select(
                    "Primary goal for LinkedIn",
                    vec![
                        opt("job-search", "Job searching"),
                        opt("networking", "Professional networking"),
                        opt("business", "Business development"),
                        opt("thought-leadership", "Thought leadership"),
                        opt("recruitment", "Recruiting talent"),
                    ],
                )
                .required(),
                QuestionDefinition::multi_select(
                    "Services needed",
                    vec![
                        opt("headline", "Professional headline optimization"),
                        opt("summary", "About section writing"),
                        opt("experience", "Experience section optimization"),
                        opt("skills", "Skills and endorsements setup"),
                        opt("photo", "Profile photo guidance"),
                        opt("strategy", "Content and networking strategy"),
                    ],
                ),
                QuestionDefinition::short_text("Target audience/industry")
                    .with_placeholder(
                        "Who do you want to connect with? (e.g., HR managers, tech leaders, etc.)",
                    )
                    .required(),
                QuestionDefinition::long_text("Current professional summary or bio")
                    .with_placeholder(
                        "Share your current bio or how you would describe your professional \
                         background...",
                    ),
            ],
        },
    }
}

fn email_signatures() -> CatalogEntry {
    CatalogEntry {
        slug: "email-signatures",
        blurb: "Polished email signatures for you or your team.",
        definition: ServiceDefinition {
            title: "Email Signature Design".to_string(),
            questions: vec![
                QuestionDefinition::single_select(
                    "Email signature purpose",
                    vec![
                        opt("personal", "Personal/Professional use"),
                        opt("business", "Business/Company use"),
                        opt("freelance", "Freelance/Consultant"),
                        opt("student", "Student/Academic"),
                    ],
                )
                .required(),
                QuestionDefinition::multi_select(
                    "Information to include",
                    vec![
                        opt("name", "Full name"),
                        opt("title", "Job title/position"),
                        opt("company", "Company name"),
                        opt("phone", "Phone number"),
                        opt("website", "Website URL"),
                        opt("social", "Social media links"),
                        opt("address", "Business address"),
                        opt("logo", "Company/personal logo"),
                    ],
                ),
                QuestionDefinition::single_select(
                    "Design style preference",
                    vec![
                        opt("minimal", "Minimal/Clean"),
                        opt("modern", "Modern/Colorful"),
                        opt("professional", "Traditional/Professional"),
                        opt("creative", "Creative/Unique"),
                    ],
                )
                .required(),
                QuestionDefinition::short_text("Brand colors (if any)")
                    .with_placeholder("Hex codes or color names (e.g., #1a73e8, blue)"),
                QuestionDefinition::long_text("Special requirements")
                    .with_placeholder("Any specific requirements or elements you want included?"),
            ],
        },
    }
}

fn business_cards() -> CatalogEntry {
    CatalogEntry {
        slug: "business-cards",
        blurb: "Business card designs ready for print.",
        definition: ServiceDefinition {
            title: "Business Card Design".to_string(),
            questions: vec![
                QuestionDefinition::single_select(
                    "Business card purpose",
                    vec![
                        opt("professional", "Professional networking"),
                        opt("business", "Business promotion"),
                        opt("personal", "Personal branding"),
                        opt("event", "Event/Conference use"),
                        opt("student", "Student networking"),
                    ],
                )
                .required(),
                QuestionDefinition::multi_select(
                    "Information to include",
                    vec![
                        opt("name", "Name"),
                        opt("title", "Job title/position"),
                        opt("company", "Company name"),
                        opt("phone", "Phone number"),
                        opt("email", "Email address"),
                        opt("website", "Website"),
                        opt("social", "Social media"),
                        opt("address", "Address"),
                        opt("logo", "Logo/branding"),
                    ],
                ),
                QuestionDefinition::single_select(
                    "Design style preference",
                    vec![
                        opt("minimalist", "Minimalist/Clean"),
                        opt("modern", "Modern/Trendy"),
                        opt("classic", "Classic/Traditional"),
                        opt("creative", "Creative/Artistic"),
                        opt("luxury", "Luxury/Premium"),
                    ],
                )
                .required(),
                QuestionDefinition::short_text("Preferred colors/theme")
                    .with_placeholder("Describe your color preferences or brand colors"),
                QuestionDefinition::single_select(
                    "Quantity needed",
                    vec![
                        opt("design-only", "Design file only"),
                        opt("100", "100 cards"),
                        opt("250", "250 cards"),
                        opt("500", "500 cards"),
                        opt("1000", "1000+ cards"),
                    ],
                )
                .required(),
            ],
        },
    }
}

fn flyers_marketing() -> CatalogEntry {
    CatalogEntry {
        slug: "flyers-marketing",
        blurb: "Flyers, posters, and marketing graphics for any event.",
        definition: ServiceDefinition {
            title: "Flyers & Marketing Materials".to_string(),
            questions: vec![
                QuestionDefinition::single_select(
                    "Type of material needed",
                    vec![
                        opt("flyer", "Event flyer"),
                        opt("poster", "Poster"),
                        opt("brochure", "Brochure/Pamphlet"),
                        opt("banner", "Banner/Sign"),
                        opt("social", "Social media graphics"),
                        opt("presentation", "Presentation slides"),
                    ],
                )
                .required(),
                QuestionDefinition::short_text("Purpose/Event type")
                    .with_placeholder("e.g., University event, business promotion, workshop, etc.")
                    .required(),
                QuestionDefinition::long_text("Key information to include")
                    .with_placeholder("Event details, dates, contact info, key messages, etc.")
                    .required(),
                QuestionDefinition::single_select(
                    "Design style preference",
                    vec![
                        opt("professional", "Professional/Corporate"),
                        opt("fun", "Fun/Casual"),
                        opt("academic", "Academic/Educational"),
                        opt("creative", "Creative/Artistic"),
                        opt("minimal", "Minimal/Clean"),
                    ],
                )
                .required(),
                QuestionDefinition::single_select(
                    "Dimensions/Format",
                    vec![
                        opt("a4", "A4 (8.5\" x 11\")"),
                        opt("a5", "A5 (5.8\" x 8.3\")"),
                        opt("letter", "Letter size"),
                        opt("square", "Square format"),
                        opt("social-media", "Social media sizes"),
                        opt("custom", "Custom size"),
                    ],
                )
                .required(),
                QuestionDefinition::long_text("Additional requirements")
                    .with_placeholder("Specific colors, fonts, images, or other requirements..."),
            ],
        },
    }
}

fn phone_support() -> CatalogEntry {
    CatalogEntry {
        slug: "phone-support",
        blurb: "Hands-on help with phone setup and issues.",
        definition: ServiceDefinition {
            title: "Phone Technical Support".to_string(),
            questions: vec![
                QuestionDefinition::short_text("Phone brand and model")
                    .with_placeholder("e.g., iPhone 14, Samsung Galaxy S23, Google Pixel 7")
                    .required(),
                QuestionDefinition::short_text("Operating system version (if known)")
                    .with_placeholder("e.g., iOS 16, Android 13"),
                QuestionDefinition::multi_select(
                    "Type of issue/support needed",
                    vec![
                        opt("setup", "Initial setup/activation"),
                        opt("apps", "App installation/issues"),
                        opt("email", "Email setup"),
                        opt("wifi", "WiFi/connectivity issues"),
                        opt("storage", "Storage/memory problems"),
                        opt("backup", "Backup and sync"),
                        opt("security", "Security/privacy settings"),
                        opt("performance", "Performance optimization"),
                        opt("transfer", "Data transfer"),
                        opt("other", "Other issues"),
                    ],
                ),
                QuestionDefinition::long_text("Describe the problem in detail")
                    .with_placeholder("Please describe what issues you are experiencing...")
                    .required(),
                QuestionDefinition::single_select(
                    "Preferred support method",
                    vec![
                        opt("remote", "Remote support (screen sharing)"),
                        opt("phone", "Phone call guidance"),
                        opt("inperson", "In-person support"),
                        opt("email", "Email instructions"),
                    ],
                )
                .required(),
                urgency_question(),
            ],
        },
    }
}

fn laptop_support() -> CatalogEntry {
    CatalogEntry {
        slug: "laptop-support",
        blurb: "Troubleshooting and setup support for laptops.",
        definition: ServiceDefinition {
            title: "Laptop Technical Support".to_string(),
            questions: vec![
                QuestionDefinition::short_text("Laptop brand and model")
                    .with_placeholder("e.g., MacBook Air M2, Dell XPS 13, HP Pavilion")
                    .required(),
                QuestionDefinition::single_select(
                    "Operating system",
                    vec![
                        opt("windows11", "Windows 11"),
                        opt("windows10", "Windows 10"),
                        opt("macos", "macOS"),
                        opt("linux", "Linux"),
                        opt("chromeos", "Chrome OS"),
                        opt("unknown", "Not sure"),
                    ],
                )
                .required(),
                QuestionDefinition::multi_select(
                    "Type of support needed",
                    vec![
                        opt("setup", "Initial setup/configuration"),
                        opt("software", "Software installation"),
                        opt("performance", "Performance optimization"),
                        opt("virus", "Virus/malware removal"),
                        opt("updates", "System updates"),
                        opt("backup", "Data backup setup"),
                        opt("network", "Network/WiFi issues"),
                        opt("email", "Email setup"),
                        opt("printing", "Printer setup"),
                        opt("recovery", "Data recovery"),
                        opt("training", "General training/tutorials"),
                    ],
                ),
                QuestionDefinition::long_text("Describe the issue or requirements")
                    .with_placeholder("Please describe what you need help with in detail...")
                    .required(),
                QuestionDefinition::single_select(
                    "Preferred support method",
                    vec![
                        opt("remote", "Remote support (screen sharing)"),
                        opt("inperson", "In-person support"),
                        opt("phone", "Phone guidance"),
                        opt("email", "Email instructions"),
                    ],
                )
                .required(),
                QuestionDefinition::single_select(
                    "Experience level",
                    vec![
                        opt("beginner", "Beginner - Need step-by-step help"),
                        opt("intermediate", "Intermediate - Comfortable with basics"),
                        opt("advanced", "Advanced - Just need technical guidance"),
                    ],
                )
                .required(),
                urgency_question(),
            ],
        },
    }
}

// Both support services close with the same urgency ladder.
fn urgency_question() -> QuestionDefinition {
    QuestionDefinition::single_select(
        "Urgency level",
        vec![
            opt("low", "Low - Can wait a few days"),
            opt("medium", "Medium - Within 24 hours"),
            opt("high", "High - Same day"),
            opt("urgent", "Urgent - ASAP"),
        ],
    )
    .required()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::QuestionKind;

    #[test]
    fn cv_creation_matches_the_published_schema() {
        let catalog = ServiceCatalog::builtin();
        let definition = catalog.lookup("cv-creation");

        assert_eq!(definition.title, "CV Creation Service");
        assert_eq!(definition.questions.len(), 5);
        assert_eq!(definition.questions[3].kind, QuestionKind::MultiSelect);
        assert_eq!(definition.questions[3].options.len(), 5);
    }

    #[test]
    fn unknown_slug_falls_back_to_a_generic_request() {
        let catalog = ServiceCatalog::builtin();
        let definition = catalog.lookup("xyz");

        assert_eq!(definition.title, "Service Request");
        assert!(definition.questions.is_empty());
    }

    #[test]
    fn select_kinds_always_carry_options() {
        let catalog = ServiceCatalog::builtin();
        for entry in catalog.entries() {
            for question in &entry.definition.questions {
                assert_eq!(
                    question.kind.has_options(),
                    !question.options.is_empty(),
                    "{}: '{}'",
                    entry.slug,
                    question.prompt,
                );
            }
        }
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_blurb() {
        let catalog = ServiceCatalog::builtin();

        let hits = catalog.search("LINKEDIN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "linkedin-setup");

        let hits = catalog.search("print");
        assert!(hits.iter().any(|entry| entry.slug == "business-cards"));

        assert_eq!(catalog.search("").len(), catalog.entries().len());
        assert!(catalog.search("no such service").is_empty());
    }
}
