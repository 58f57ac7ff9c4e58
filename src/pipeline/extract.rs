//! Example splitting: locate the Examples section and pull out its blocks

use regex::Regex;

use crate::Result;

/// A candidate example block matched inside an Examples section
#[derive(Debug, Clone)]
pub struct ExampleBlock {
    /// Heading text, exactly as captured
    pub title: String,
    /// Free text between the heading and the code fence, untrimmed
    pub description: String,
    /// Fenced code, untrimmed
    pub code: String,
}

/// Splits README text into example blocks.
///
/// A README without an `## Examples` heading followed (anywhere later) by a
/// `---` divider has no section and yields nothing. Within the section, a
/// block is a `###` heading, free text, and a fence tagged `jsx`; anything
/// that does not match that shape is silently ignored.
pub struct ExampleSplitter {
    section: Regex,
    block: Regex,
}

impl ExampleSplitter {
    pub fn new() -> Result<Self> {
        // The section capture is greedy on purpose: it runs to the last
        // divider in the file so trailing blocks are not cut off.
        let section = Regex::new(r"(?s)## Examples(.*)---")?;
        let block = Regex::new(r"(?ms)### (.*?$)(.*?)```jsx(.*?)``` ?")?;
        Ok(Self { section, block })
    }

    /// Locate the Examples section; `None` when the README has no section
    pub fn examples_section<'a>(&self, readme: &'a str) -> Option<&'a str> {
        self.section
            .captures(readme)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Match every example block in a section, in document order
    pub fn example_blocks(&self, section: &str) -> Vec<ExampleBlock> {
        self.block
            .captures_iter(section)
            .filter_map(|caps| {
                Some(ExampleBlock {
                    title: caps.get(1)?.as_str().to_string(),
                    description: caps.get(2)?.as_str().to_string(),
                    code: caps.get(3)?.as_str().to_string(),
                })
            })
            .collect()
    }
}

/// Derive the snippet key from a heading title: capitalize the first letter
/// of each space-delimited word and concatenate without separators.
pub fn example_name(title: &str) -> String {
    title
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE_README: &str = "\
# Badge

Intro text.

## Examples

### Default badge

Use to give a non-critical status update.

```jsx
<Badge>Fulfilled</Badge>
```

### Informational badge

Use to call out an important attribute.

```jsx
<Badge status=\"info\">Published</Badge>
```

---

## Related components
";

    #[test]
    fn finds_the_examples_section() {
        let splitter = ExampleSplitter::new().unwrap();
        let section = splitter.examples_section(BADGE_README).unwrap();
        assert!(section.contains("### Default badge"));
        assert!(section.contains("### Informational badge"));
    }

    #[test]
    fn no_section_when_the_heading_is_absent() {
        let splitter = ExampleSplitter::new().unwrap();
        assert!(splitter.examples_section("# Badge\n\njust prose\n").is_none());
    }

    #[test]
    fn no_section_without_a_trailing_divider() {
        let splitter = ExampleSplitter::new().unwrap();
        let readme = "## Examples\n\n### One\n\n```jsx\n<Tag />\n```\n";
        assert!(splitter.examples_section(readme).is_none());
    }

    #[test]
    fn section_runs_to_the_last_divider() {
        let splitter = ExampleSplitter::new().unwrap();
        let readme = "## Examples\n\nfirst---\n\nmore text\n\n---\n";
        let section = splitter.examples_section(readme).unwrap();
        assert!(section.ends_with("more text\n\n"));
    }

    #[test]
    fn matches_every_block_in_order() {
        let splitter = ExampleSplitter::new().unwrap();
        let section = splitter.examples_section(BADGE_README).unwrap();
        let blocks = splitter.example_blocks(section);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].title, "Default badge");
        assert_eq!(
            blocks[0].description.trim(),
            "Use to give a non-critical status update."
        );
        assert_eq!(blocks[0].code.trim(), "<Badge>Fulfilled</Badge>");
        assert_eq!(blocks[1].title, "Informational badge");
    }

    #[test]
    fn ignores_fences_without_the_jsx_tag() {
        let splitter = ExampleSplitter::new().unwrap();
        let section = "\n### Plain\n\ntext\n\n```\n<Badge />\n```\n";
        assert!(splitter.example_blocks(section).is_empty());
    }

    #[test]
    fn derives_names_from_titles() {
        assert_eq!(example_name("Default badge"), "DefaultBadge");
        assert_eq!(
            example_name("Autocomplete with lazy loading"),
            "AutocompleteWithLazyLoading"
        );
        // Doubled spaces produce empty words, which contribute nothing.
        assert_eq!(example_name("Default  badge"), "DefaultBadge");
    }
}
