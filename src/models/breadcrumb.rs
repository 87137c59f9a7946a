//! Breadcrumb trail above each dashboard page.

/// One step of the trail. Steps without `href` are plain text.
#[derive(Clone, Debug, PartialEq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Flattened rendering order of a trail.
#[derive(Clone, Debug, PartialEq)]
pub enum TrailPart {
    Link { label: String, href: String },
    Text(String),
    Separator,
}

/// Lays out a trail with one separator between consecutive items and none
/// after the last.
pub fn trail(items: &[BreadcrumbItem]) -> Vec<TrailPart> {
    let mut parts = Vec::with_capacity(items.len() * 2);
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            parts.push(TrailPart::Separator);
        }
        parts.push(match &item.href {
            Some(href) => TrailPart::Link {
                label: item.label.clone(),
                href: href.clone(),
            },
            None => TrailPart::Text(item.label.clone()),
        });
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separators(parts: &[TrailPart]) -> usize {
        parts
            .iter()
            .filter(|p| matches!(p, TrailPart::Separator))
            .count()
    }

    #[test]
    fn test_two_items_one_separator_between() {
        let parts = trail(&[
            BreadcrumbItem::text("Dashboards"),
            BreadcrumbItem::text("Crypto"),
        ]);
        assert_eq!(
            parts,
            vec![
                TrailPart::Text("Dashboards".to_string()),
                TrailPart::Separator,
                TrailPart::Text("Crypto".to_string()),
            ]
        );
        assert_ne!(parts.last(), Some(&TrailPart::Separator));
    }

    #[test]
    fn test_separator_count() {
        assert!(trail(&[]).is_empty());
        assert_eq!(separators(&trail(&[BreadcrumbItem::text("Only")])), 0);
        let items: Vec<_> = (0..5).map(|i| BreadcrumbItem::text(i.to_string())).collect();
        assert_eq!(separators(&trail(&items)), 4);
    }

    #[test]
    fn test_href_becomes_link() {
        let parts = trail(&[
            BreadcrumbItem::link("Dashboards", "#/analytics"),
            BreadcrumbItem::text("Crypto"),
        ]);
        assert_eq!(
            parts[0],
            TrailPart::Link {
                label: "Dashboards".to_string(),
                href: "#/analytics".to_string(),
            }
        );
    }
}
