//! Static copy and data rendered by the page.

pub const OWNER_NAME: &str = "Chengjia Feng";
pub const HERO_SUBTITLE: &str = "Software Engineer & Full-Stack LLM Application Developer";
pub const HERO_DESCRIPTION: &str = "Passionate about building scalable web applications, machine learning solutions, and data-driven systems. Currently pursuing MS in Software Engineering systems at Northeastern University.";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const PROFILE_IMAGE_PATH: &str = "/profile.jpeg";
pub const EMAIL: &str = "feng.chen@northeastern.edu";
pub const GITHUB_URL: &str = "https://github.com/chengjiafeng857";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/chengjia-feng-a59698291";
pub const COPYRIGHT: &str = "© 2024 Chengjia Feng. All rights reserved.";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a passionate software engineer currently pursuing my Master's in Software Engineering systems at Northeastern University. With a strong foundation in full-stack development, AI Agent development and machine learning, I enjoy creating innovative solutions that solve real-world problems.",
    "My experience spans across various technologies including Python, Java, React, Node.js, Langchain/Langgraph and cloud platforms. I've worked on projects ranging from e-commerce platforms to AI agent applications, always focusing on writing clean, efficient, and scalable code.",
    "When I'm not coding, I enjoy exploring new technologies, contributing to open-source projects, and staying up-to-date with the latest industry trends. I'm particularly interested in the intersection of AI and web development.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        value: "1+",
        label: "Years Experience (internships included)",
    },
    Stat {
        value: "5+",
        label: "Projects Completed",
    },
    Stat {
        value: "8+",
        label: "Technologies Mastered",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub text: &'static str,
    pub details: &'static [&'static str],
}

const fn plain(text: &'static str) -> Highlight {
    Highlight { text, details: &[] }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: &'static [Highlight],
}

pub const EXPERIENCE: [Experience; 4] = [
    Experience {
        role: "AI Engineering Intern",
        organization: "Phicil-itate Change",
        period: "Jan 2025 - Aug 2025",
        highlights: &[
            plain("Engineered a full-stack web application using React.js and FastAPI, implementing a GitOps pipeline via Argo CD and GitHub Actions for CI/CD, deployed on CloudFlare."),
            Highlight {
                text: "Developed five AI agents processing 1,000+ daily queries:",
                details: &[
                    "Voice Agent - Phone system integration",
                    "LangGraph-based CoT Deep Research Agent",
                    "CrewAI Multi-agent Report Generator",
                    "Natural Language SQL Query Agent",
                    "Automated Data Visualization Pipeline",
                ],
            },
            plain("Designed and maintained a HIPAA-compliant PostgreSQL database managing 3,000+ patient records, incorporating TLS encryption, audit logging, and achieving 99.9% uptime."),
        ],
    },
    Experience {
        role: "Graduate Student",
        organization: "Northeastern University",
        period: "Sep 2023 - Present",
        highlights: &[
            plain("Pursuing Master of Science in Software Engineering systems"),
            plain("Relevant Coursework: Algorithms, Database Systems, Machine Learning, Software Engineering"),
            plain("Maintaining strong academic performance while working on practical projects"),
            plain("Active participant in coding competitions and hackathons"),
        ],
    },
    Experience {
        role: "Software Engineering Co-op",
        organization: "Zhongshan Super Delight Software",
        period: "Aug 2021 - Oct 2021",
        highlights: &[
            plain("Contributed to the development and testing of all modules, solving high concurrency with Spring Cloud and async processing in a domestic hardware retail system using the F2B2C business model."),
            plain("Designed and developed RESTful APIs for Warehouse and Sales modules using Spring MVC, MyBatis, and SQL."),
            plain("Implemented a micro-service architecture with RabbitMQ message queuing and Redis caching."),
        ],
    },
    Experience {
        role: "Undergraduate Study",
        organization: "University of Electronic Science and Technology of China",
        period: "Sep 2018 - Jul 2022",
        highlights: &[
            plain("Bachelor in Computer Science"),
            plain("Relevant Coursework: Data Structures and Algorithms, Database Systems, Linux Management"),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub summary: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub links: &'static [Link],
}

pub const PROJECTS: [Project; 5] = [
    Project {
        title: "Agentic RAG Assistant for Techdocs",
        image: "/projects/agentic-rag.png",
        image_alt: "Agentic RAG assistant",
        summary: &[
            "Agentic RAG: query any uploaded documents (PDFs, Markdown, notebooks) with grounded answers. Includes official LangChain docs by default.",
            "GitHub Resource Finder (in development): an agent-based tool for retrieving relevant GitHub resources.",
        ],
        tech: &["Streamlit", "PostgreSQL", "Python", "LangChain"],
        links: &[
            Link {
                label: "Live Demo",
                href: "http://134.199.142.71",
            },
            Link {
                label: "GitHub",
                href: "https://github.com/chengjiafeng857/agentic_rag_techdoc",
            },
        ],
    },
    Project {
        title: "Opt-imize",
        image: "/projects/opt-imize.png",
        image_alt: "Opt-imize immigration assistant",
        summary: &["AI-powered platform supporting OPT/H1B immigration queries using RAG, GPT-4o, and LangChain agents. Features real-time USCIS data, a CrewAI multi-agent system, a MERN web app, and AWS/Kubernetes deployment."],
        tech: &["MongoDB", "React", "Express", "Node.js", "LangChain"],
        links: &[Link {
            label: "Live Demo",
            href: "https://opt-imize.com/",
        }],
    },
    Project {
        title: "School Sports Management System",
        image: "/projects/sports-management.jpeg",
        image_alt: "Sports management dashboard",
        summary: &["Built and deployed modules for field, equipment, and athlete management using Spring Boot, MyBatis, and Docker. Led backend/API development and CI/CD automation with Jenkins and GitHub Actions, cutting release cycles by 60%."],
        tech: &["Java", "Spring Boot", "MyBatis", "SQL", "Spring Cloud", "Docker"],
        links: &[Link {
            label: "GitHub",
            href: "https://github.com/chengjiafeng857/mirrohMatch",
        }],
    },
    Project {
        title: "MirroMatch",
        image: "/projects/mirromatch.png",
        image_alt: "MirroMatch coaching platform",
        summary: &["A B2B platform for dating coaches, offering tools to boost client engagement, enable dating-specific practice, and streamline feedback between sessions."],
        tech: &["Node.js", "PostgreSQL", "Express", "CSS3", "React.js", "LangChain"],
        links: &[Link {
            label: "GitHub",
            href: "https://github.com/chengjiafeng857/mirrohMatch",
        }],
    },
    Project {
        title: "Cross-Platform Mobile App",
        image: "/projects/mobile-app.jpeg",
        image_alt: "Mobile social app",
        summary: &["A cross-platform mobile application for social networking with real-time messaging, photo sharing, and location-based features. Built with React Native."],
        tech: &["React Native", "Redux", "Firebase", "Maps API", "Push Notifications"],
        links: &[Link {
            label: "GitHub",
            href: "https://github.com/chengjiafeng857",
        }],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    /// Percentage, 0 to 100.
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [SkillEntry],
}

const fn skill(name: &'static str, level: u8) -> SkillEntry {
    SkillEntry { name, level }
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            skill("React.js", 90),
            skill("JavaScript", 95),
            skill("TypeScript", 85),
            skill("HTML/CSS", 95),
            skill("Vue.js", 80),
        ],
    },
    SkillCategory {
        title: "Backend Development",
        skills: &[
            skill("Node.js", 88),
            skill("Python", 92),
            skill("Java", 80),
            skill("Express.js", 85),
            skill("Django", 75),
        ],
    },
    SkillCategory {
        title: "Database & Cloud",
        skills: &[
            skill("MongoDB", 85),
            skill("PostgreSQL", 80),
            skill("AWS", 75),
            skill("Docker", 70),
            skill("Firebase", 82),
        ],
    },
    SkillCategory {
        title: "Tools & Others",
        skills: &[
            skill("Git", 90),
            skill("Machine Learning", 78),
            skill("Agile/Scrum", 85),
            skill("REST APIs", 88),
            skill("TensorFlow", 72),
        ],
    },
];

pub const CONTACT_INTRO: &str = "I'm always interested in new opportunities and exciting projects. Whether you have a question or just want to say hi, feel free to reach out!";

pub const CONTACT_CHANNELS: [Link; 3] = [
    Link {
        label: EMAIL,
        href: "mailto:feng.chen@northeastern.edu",
    },
    Link {
        label: "LinkedIn Profile",
        href: LINKEDIN_URL,
    },
    Link {
        label: "GitHub Profile",
        href: GITHUB_URL,
    },
];

/// Section ids linked from the footer.
pub const FOOTER_SECTIONS: [&str; 4] = ["home", "about", "projects", "contact"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections;

    #[test]
    fn skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for entry in category.skills {
                assert!(entry.level <= 100, "{} out of range", entry.name);
            }
        }
    }

    #[test]
    fn footer_links_point_at_registered_sections() {
        for id in FOOTER_SECTIONS {
            assert!(sections::find(id).is_some(), "unknown footer section {id}");
        }
    }

    #[test]
    fn every_project_has_a_link_and_tags() {
        for project in PROJECTS {
            assert!(!project.links.is_empty(), "{} has no links", project.title);
            assert!(!project.tech.is_empty());
        }
    }
}
