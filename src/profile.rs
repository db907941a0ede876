//! Static profile data served by the terminal commands.

use std::borrow::Cow;

macro_rules! github_url {
    () => {
        "https://github.com/foysal-mahmud-hasan"
    };
}

/// Web-style path of the downloadable resume
pub const RESUME_PATH: &str = "/foysal-mahmud-hasan-resume.pdf";

/// Web-style path of the profile photograph used for the art rendering
pub const PROFILE_IMAGE: &str = "/foysal-mahmud-hasan.jpg";

pub const WHOAMI: &str = "Foysal Mahmud Hasan — Full-Stack Developer
Status: Available for opportunities
Location: Dhaka, Bangladesh (Remote-friendly)
Experience: 2+ years in web development

Work:
- Right Brain Solution — Junior Software Engineer (present)
- White Services Technologies — Software Engineer Intern (6 months)
- Daraz Bangladesh — Customer Service Executive (4 months)

Education:
- SSC — Monipur High School
- HSC — Bir Shrestha Noor Mohammad Public College
- BSc (CSE) — Independent University Bangladesh

Tech: JavaScript, TypeScript, React, Mantine, Tailwind CSS, Node.js, Express, Laravel, WordPress (plugins & Elementor), MySQL

Contact: foysalmahmud.iub@gmail.com · +8801521334751
LinkedIn: https://www.linkedin.com/in/foysal-mahmud-hasan/
Portfolio: portfolio.com";

pub const ABOUT: &str = "About Me:
Foysal Mahmud Hasan is a Full-Stack Developer based in Dhaka, Bangladesh with 2+ years of experience building web applications. My focus is on accessible, performant, and maintainable solutions, working primarily with JavaScript and TypeScript stacks.

Background: I have professional experience across startups and product teams, including roles at Right Brain Solution, White Services Technologies (intern), and Daraz. I enjoy turning designs into polished interfaces and building backend services that scale.

Interests: design systems, developer experience, and open-source collaboration.";

pub const SKILLS: &str = "Technical Skills:
Frontend: React, TypeScript, Mantine, Tailwind CSS
Backend: Node.js, Express, Laravel
CMS: WordPress (plugins, Elementor)
Databases: MySQL
Tools: Git, Docker, Vercel
Other: REST APIs, Testing, Performance Optimization";

pub const PROJECTS: &str = concat!(
    "GitHub: ",
    github_url!(),
    "\nCompany projects: ERP, CMS, E-commerce, Analytics, Internal tools (confidential)"
);

pub const CONTACT: &str = concat!(
    "Contact Information:
Email:    foysalmahmud.iub@gmail.com
Mobile:   +8801521334751
GitHub:   ",
    github_url!(),
    "
LinkedIn: https://www.linkedin.com/in/foysal-mahmud-hasan/
Portfolio: portfolio.com

Feel free to reach out for collaborations or inquiries!"
);

const EDUCATION: &str = "- SSC — Monipur High School
- HSC — Bir Shrestha Noor Mohammad Public College
- BSc (CSE) — Independent University Bangladesh";

/// Named text blocks of the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Identity,
    About,
    Skills,
    Projects,
    Contact,
    /// The full markdown document assembled from the other blocks
    ComposedDocument,
}

/// Read-only profile data plus the resource locators it points at.
#[derive(Debug, Clone)]
pub struct Profile {
    pub resume_path: String,
    pub image_source: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            resume_path: RESUME_PATH.to_string(),
            image_source: PROFILE_IMAGE.to_string(),
        }
    }
}

impl Profile {
    pub fn text(&self, topic: Topic) -> Cow<'static, str> {
        match topic {
            Topic::Identity => Cow::Borrowed(WHOAMI),
            Topic::About => Cow::Borrowed(ABOUT),
            Topic::Skills => Cow::Borrowed(SKILLS),
            Topic::Projects => Cow::Borrowed(PROJECTS),
            Topic::Contact => Cow::Borrowed(CONTACT),
            Topic::ComposedDocument => Cow::Owned(portfolio_md()),
        }
    }

    /// File name a download of the resume is saved under
    pub fn resume_file_name(&self) -> &str {
        file_name_of(&self.resume_path).unwrap_or("resume.pdf")
    }
}

/// Last non-empty path segment of a web-style path or URL
pub fn file_name_of(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|s| !s.is_empty())
}

fn portfolio_md() -> String {
    format!(
        "# Foysal Mahmud Hasan\n\n{ABOUT}\n\n## Skills\n\n{SKILLS}\n\n## Education\n\n{EDUCATION}\n\n## Projects\n\n{PROJECTS}\n\n## Contact\n\n{CONTACT}"
    )
}
