//! Тесты для лексического анализатора rustlex

pub mod dialect_tests;
