// Arrays & hashing problems module
// Add problem modules here as they are implemented

pub mod contains_duplicate;
pub mod two_sum;
pub mod valid_anagram;

use crate::TaskGroup;

pub fn tasks() -> TaskGroup {
    TaskGroup::new("arrays_hashing")
        .add("contains_duplicate", contains_duplicate::solve)
        .add("valid_anagram", valid_anagram::solve)
        .add("two_sum", two_sum::solve)
}
