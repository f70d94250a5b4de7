/// The community page shows at most six photo tiles.
pub const MAX_ITEMS: usize = 6;

/// Build-time manifest of the gallery assets shipped under
/// `/assets/galeria/`. Filenames carry a numeric suffix so lexicographic
/// order is display order.
const MANIFEST: &[&str] = &[
    "/assets/galeria/galeria-01.jpg",
    "/assets/galeria/galeria-02.jpg",
    "/assets/galeria/galeria-03.jpg",
    "/assets/galeria/galeria-04.jpg",
    "/assets/galeria/galeria-05.jpg",
    "/assets/galeria/galeria-06.jpg",
];

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    pub src: String,
    pub filename: String,
    pub alt: String,
}

pub fn filename_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Display label derived from a filename: extension stripped, separators
/// replaced by spaces, whitespace collapsed.
pub fn alt_from_filename(filename: &str) -> String {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename);
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordered item list for a set of asset paths: sorted by filename and
/// truncated to the first [`MAX_ITEMS`].
pub fn items_from_paths(paths: &[&str]) -> Vec<GalleryItem> {
    let mut items: Vec<GalleryItem> = paths
        .iter()
        .map(|path| {
            let filename = filename_from_path(path).to_string();
            GalleryItem {
                id: (*path).to_string(),
                src: (*path).to_string(),
                alt: alt_from_filename(&filename),
                filename,
            }
        })
        .collect();
    items.sort_by(|a, b| a.filename.cmp(&b.filename));
    items.truncate(MAX_ITEMS);
    items
}

/// The full gallery as shipped; computed once per page via `use_memo`.
pub fn load_items() -> Vec<GalleryItem> {
    items_from_paths(MANIFEST)
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        current
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        current
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        assert_eq!(next_index(5, 6), 0);
        assert_eq!(next_index(0, 6), 1);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        assert_eq!(prev_index(0, 6), 5);
        assert_eq!(prev_index(3, 6), 2);
    }

    #[test]
    fn single_item_navigation_stays_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn empty_list_navigation_is_safe() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn items_are_sorted_and_truncated_to_six() {
        let paths = [
            "/assets/galeria/galeria-07.jpg",
            "/assets/galeria/galeria-02.jpg",
            "/assets/galeria/galeria-05.jpg",
            "/assets/galeria/galeria-01.jpg",
            "/assets/galeria/galeria-08.jpg",
            "/assets/galeria/galeria-04.jpg",
            "/assets/galeria/galeria-03.jpg",
            "/assets/galeria/galeria-06.jpg",
        ];
        let items = items_from_paths(&paths);
        assert_eq!(items.len(), MAX_ITEMS);
        let filenames: Vec<&str> = items.iter().map(|i| i.filename.as_str()).collect();
        assert_eq!(
            filenames,
            [
                "galeria-01.jpg",
                "galeria-02.jpg",
                "galeria-03.jpg",
                "galeria-04.jpg",
                "galeria-05.jpg",
                "galeria-06.jpg",
            ]
        );
    }

    #[test]
    fn empty_manifest_yields_no_items() {
        assert!(items_from_paths(&[]).is_empty());
    }

    #[test]
    fn alt_label_strips_extension_and_separators() {
        assert_eq!(alt_from_filename("galeria-01.jpg"), "galeria 01");
        assert_eq!(alt_from_filename("dia_del_nino.webp"), "dia del nino");
        assert_eq!(alt_from_filename("sin-extension"), "sin extension");
    }
}
