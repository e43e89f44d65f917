//! Bridge storage specs

mod disappearing;
