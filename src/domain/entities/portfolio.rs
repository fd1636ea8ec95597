use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WorkItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub works: Vec<WorkItem>,
}

impl Category {
    pub fn featured(&self) -> impl Iterator<Item = &WorkItem> {
        self.works.iter().filter(|w| w.featured)
    }
}

fn work(id: &'static str, title: &'static str, description: &'static str, featured: bool) -> WorkItem {
    WorkItem { id, title, description, featured }
}

pub fn catalogue() -> Vec<Category> {
    vec![
        Category {
            id: "written",
            label: "Written Work",
            works: vec![
                work("poem-1", "Untitled Poem", "A reflection on modern society and individual identity.", true),
                work("essay-1", "Digital Age Reflections", "An exploration of technology's impact on human connection.", false),
            ],
        },
        Category {
            id: "spoken",
            label: "Spoken Word",
            works: vec![
                work("performance-1", "Voice of the Streets", "A powerful spoken word piece about urban life and resilience.", true),
                work("performance-2", "Digital Echoes", "Exploring the intersection of technology and human emotion.", false),
            ],
        },
        Category {
            id: "visual",
            label: "Visual Art",
            works: vec![
                work("an-r-key", "An-R-Key", "Anarchy is uncut, raw, a blank slate which unlocks your inner workings. When one door closes, use an R-Key to open the next.", true),
                work("monopowerly", "Monopowerly", "A Christmas 2023 response to Hasbro's advertising campaign, showcasing the power of individual creativity over corporate monopolies.", true),
            ],
        },
    ]
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub categories: Vec<Category>,
    pub total_works: usize,
}
