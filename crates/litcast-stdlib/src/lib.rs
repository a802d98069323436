//! Template helpers registered into a [`FuncMap`].
//!
//! Numeric parameters are declared with concrete kinds so that
//! `litcast_runtime::augment` can resolve number literals for them.

use litcast_runtime::FuncMap;
use log::debug;

pub mod cast;
pub mod list;
pub mod logic;
pub mod math;
pub mod random;
pub mod string;

pub fn register_all(m: &mut FuncMap) {
    string::register_string(m);
    math::register_math(m);
    list::register_list(m);
    random::register_random(m);
    logic::register_logic(m);
}

pub fn register_with(m: &mut FuncMap, groups: &[&str]) {
    for g in groups {
        match *g {
            "string" => string::register_string(m),
            "math" => math::register_math(m),
            "list" => list::register_list(m),
            "random" => random::register_random(m),
            "logic" => logic::register_logic(m),
            other => debug!("unknown stdlib group {:?}", other),
        }
    }
}
