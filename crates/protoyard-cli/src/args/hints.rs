pub mod cmd {
    pub const AGGREGATE: &str = "protoyard aggregate";
    pub const AGGREGATE_WATCH: &str = "protoyard aggregate --watch";
    pub const PROJECT_LIST: &str = "protoyard project list";
    pub const PROJECT_NEW: &str =
        "protoyard project new --name <name> --title <title> --description <text> --creator <you>";
    pub const SERVE: &str = "protoyard serve";
}

pub mod fmt {
    pub fn project_show(id: &str) -> String {
        format!("protoyard project show {}", id)
    }
}
