#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Remote,
    File,
}

pub fn get_resource_kind(resource: &str) -> ResourceKind {
    let lowered: String = resource.trim().to_ascii_lowercase();

    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        ResourceKind::Remote
    } else {
        ResourceKind::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_remote_and_file_resources() {
        assert_eq!(get_resource_kind("https://example.com/a.csv"), ResourceKind::Remote);
        assert_eq!(get_resource_kind("HTTP://example.com/a.csv"), ResourceKind::Remote);
        assert_eq!(get_resource_kind("data/brent_crude_monthly.csv"), ResourceKind::File);
        assert_eq!(get_resource_kind("/srv/data/henry_hub_monthly.csv"), ResourceKind::File);
    }
}
