use std::collections::HashSet;

/// Lowercased title with punctuation dropped and separators folded into `_`.
pub fn title_to_filename(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}

/// Hands out unique file names within one batch.
///
/// A name that was already handed out gets `-<dashboard id>` appended. Base
/// names never contain `-`, so suffixed names cannot collide with base names,
/// and ids are unique, so one suffix always settles it.
#[derive(Debug, Default)]
pub struct FilenameAllocator {
    used: HashSet<String>,
}

impl FilenameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, title: &str, id: &str) -> String {
        let mut name = title_to_filename(title);
        if name.is_empty() {
            // Nothing usable in the title
            name = id.to_string();
        }
        if self.used.contains(&name) {
            name = format!("{}-{}", name, id);
        }
        self.used.insert(name.clone());
        name
    }
}
