//! CLI parse tests, one file per tool.
