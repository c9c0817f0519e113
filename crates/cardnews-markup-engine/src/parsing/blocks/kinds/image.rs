use crate::parsing::patterns;

/// Standalone image line: `![alt](url)` with nothing else on the line.
pub struct Image;

/// The parts of a standalone image line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageParts<'a> {
    pub alt: &'a str,
    pub url: &'a str,
}

impl Image {
    pub fn standalone(line: &str) -> Option<ImageParts<'_>> {
        let caps = patterns::standalone_image().captures(line)?;
        Some(ImageParts {
            alt: caps.get(1).map_or("", |m| m.as_str()),
            url: caps.get(2)?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_image() {
        assert_eq!(
            Image::standalone("![alt](http://img)"),
            Some(ImageParts {
                alt: "alt",
                url: "http://img"
            })
        );
    }

    #[test]
    fn empty_alt_is_allowed() {
        assert_eq!(Image::standalone("![](a.png)").map(|p| p.url), Some("a.png"));
    }

    #[test]
    fn image_with_surrounding_text_is_not_standalone() {
        assert_eq!(Image::standalone("see ![alt](x.png)"), None);
        assert_eq!(Image::standalone("![alt](x.png) caption"), None);
    }

    #[test]
    fn empty_url_is_not_an_image() {
        assert_eq!(Image::standalone("![alt]()"), None);
    }
}
