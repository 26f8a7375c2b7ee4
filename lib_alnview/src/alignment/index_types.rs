use strong_type::StrongType;

/// A column position in the uncompressed alignment.
#[derive(StrongType)]
#[strong_type(conversion)]
pub struct SiteIndex(usize);

/// An index into the pattern table of a pattern-compressed alignment.
#[derive(StrongType)]
#[strong_type(conversion)]
pub struct PatternIdentifier(usize);

/// A row position, one per taxon.
#[derive(StrongType)]
#[strong_type(conversion)]
pub struct TaxonIndex(usize);
