//! Реестр диалектов
//!
//! Процессный именованный реестр: потребители выбирают диалект по имени
//! перед созданием сканера. Встроенный диалект `"sql"` регистрируется
//! при первом обращении к реестру.

use crate::common::{Error, Result};
use crate::lexer::dialect::Dialect;
use crate::lexer::sql::sql_dialect;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Именованный реестр диалектов
pub struct DialectRegistry {
    dialects: RwLock<HashMap<String, Arc<Dialect>>>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self {
            dialects: RwLock::new(HashMap::new()),
        }
    }

    /// Регистрирует диалект под его именем
    ///
    /// Повторная регистрация того же имени заменяет предыдущий диалект.
    pub fn register(&self, dialect: Dialect) -> Result<()> {
        let name = dialect.name.clone();
        let mut dialects = self
            .dialects
            .write()
            .map_err(|_| Error::lock("dialect registry lock poisoned"))?;
        dialects.insert(name.clone(), Arc::new(dialect));
        log::debug!("registered dialect '{}'", name);
        Ok(())
    }

    /// Возвращает диалект по имени
    pub fn get(&self, name: &str) -> Result<Arc<Dialect>> {
        let dialects = self
            .dialects
            .read()
            .map_err(|_| Error::lock("dialect registry lock poisoned"))?;
        dialects
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| Error::configuration(format!("unknown dialect: {}", name)))
    }

    /// Возвращает имена зарегистрированных диалектов
    pub fn names(&self) -> Result<Vec<String>> {
        let dialects = self
            .dialects
            .read()
            .map_err(|_| Error::lock("dialect registry lock poisoned"))?;
        let mut names: Vec<String> = dialects.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Глобальный экземпляр реестра диалектов
lazy_static::lazy_static! {
    pub static ref DIALECTS: Arc<DialectRegistry> = {
        let registry = DialectRegistry::new();
        if let Err(err) = registry.register(sql_dialect()) {
            log::error!("failed to register builtin sql dialect: {}", err);
        }
        Arc::new(registry)
    };
}

/// Удобная функция для регистрации диалекта
pub fn register_dialect(dialect: Dialect) -> Result<()> {
    DIALECTS.register(dialect)
}

/// Удобная функция для получения диалекта по имени
pub fn get_dialect(name: &str) -> Result<Arc<Dialect>> {
    DIALECTS.get(name)
}

/// Удобная функция для получения имен зарегистрированных диалектов
pub fn dialect_names() -> Result<Vec<String>> {
    DIALECTS.names()
}
