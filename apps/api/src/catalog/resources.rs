use serde::{Deserialize, Serialize};

use super::normalize;

/// An external link suggested for closing a skill gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

type ResourceRow = (&'static str, &'static str, &'static str);

const RESOURCES: &[(&str, &[ResourceRow])] = &[
    (
        "html",
        &[
            ("HTML Crash Course", "https://www.w3schools.com/html/", "tutorial"),
            ("MDN HTML Guide", "https://developer.mozilla.org/en-US/docs/Web/HTML", "documentation"),
        ],
    ),
    (
        "css",
        &[
            ("CSS Tutorial", "https://www.w3schools.com/css/", "tutorial"),
            ("Flexbox Guide", "https://css-tricks.com/snippets/css/a-guide-to-flexbox/", "article"),
        ],
    ),
    (
        "javascript",
        &[
            ("JavaScript.info", "https://javascript.info/", "tutorial"),
            ("MDN JavaScript", "https://developer.mozilla.org/en-US/docs/Web/JavaScript", "documentation"),
        ],
    ),
    (
        "react",
        &[
            ("React Official Tutorial", "https://reactjs.org/tutorial/tutorial.html", "tutorial"),
            ("React Docs", "https://react.dev/learn", "documentation"),
        ],
    ),
    (
        "node.js",
        &[
            ("Node.js Official Docs", "https://nodejs.org/en/docs/", "documentation"),
            ("Node.js Tutorial", "https://www.tutorialspoint.com/nodejs/", "tutorial"),
        ],
    ),
    (
        "express",
        &[
            ("Express.js Guide", "https://expressjs.com/en/starter/installing.html", "documentation"),
            ("Express Crash Course", "https://www.youtube.com/watch?v=L72fhGm1tfE", "video"),
        ],
    ),
    (
        "mongodb",
        &[
            ("MongoDB University", "https://university.mongodb.com/", "course"),
            ("MongoDB Docs", "https://docs.mongodb.com/", "documentation"),
        ],
    ),
    (
        "git",
        &[
            ("Git Tutorial", "https://www.atlassian.com/git/tutorials", "tutorial"),
            ("Git Cheat Sheet", "https://education.github.com/git-cheat-sheet-education.pdf", "cheatsheet"),
        ],
    ),
    (
        "python",
        &[
            ("Python Official Tutorial", "https://docs.python.org/3/tutorial/", "tutorial"),
            ("Python for Everybody", "https://www.py4e.com/", "course"),
        ],
    ),
    (
        "sql",
        &[
            ("SQL Tutorial", "https://www.w3schools.com/sql/", "tutorial"),
            ("SQLZoo", "https://sqlzoo.net/", "practice"),
        ],
    ),
];

/// Returns learning links for a skill.
///
/// Known skills map to curated entries. Anything else gets exactly one
/// synthesized web-search link of type `"search"`.
pub fn resources_for(skill_name: &str) -> Vec<LearningResource> {
    let key = normalize(skill_name);
    match RESOURCES.iter().find(|(skill, _)| *skill == key) {
        Some((_, rows)) => rows
            .iter()
            .map(|(title, url, kind)| LearningResource {
                title: title.to_string(),
                url: url.to_string(),
                kind: kind.to_string(),
            })
            .collect(),
        None => vec![search_fallback(skill_name)],
    }
}

fn search_fallback(skill_name: &str) -> LearningResource {
    let skill = skill_name.trim();
    LearningResource {
        title: format!("{skill} Documentation"),
        url: format!(
            "https://www.google.com/search?q={}+tutorial",
            urlencoding::encode(skill)
        ),
        kind: "search".to_string(),
    }
}
