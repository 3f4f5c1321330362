pub(crate) mod renderable;
pub(crate) mod virtual_list;
