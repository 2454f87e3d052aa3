/// Data layer: records, loading, hiding sources and aggregation.
///
/// Architecture:
/// ```text
///   *.fv files
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse files → Dataset (frequency-sorted)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  toggle   │  Action::HideSource → Dataset with that source hidden
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  visible records → mean velocity per frequency
///   └───────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
pub mod toggle;
