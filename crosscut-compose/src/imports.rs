//! Import registration and name-qualification decisions.

use indexmap::IndexMap;

use crosscut_model::TypeReference;

/// Package whose members are in scope without an explicit import.
const IMPLICIT_PACKAGE: &str = "java.lang";

/// Decides, per referenced type, whether a short simple name is safe to print
/// or the fully qualified form is required, and owns the master import list.
///
/// One resolver serves exactly one emission and is exclusively owned by its
/// composer. Decisions are made eagerly at the moment each reference is
/// written: the composer makes a single forward pass and never revisits
/// already-written text, so an import discovered while rendering the last
/// member must still land in the header placed before the first.
///
/// # Example
///
/// ```
/// use crosscut_compose::ImportResolver;
/// use crosscut_model::TypeReference;
///
/// let mut resolver = ImportResolver::new("com.acme");
/// let money = TypeReference::new("com.bank.Money");
/// assert_eq!(resolver.render_type(&money), "Money");
/// assert_eq!(resolver.sorted_imports().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ImportResolver {
    home_package: String,
    /// Keyed by fully qualified name; rendered in sorted order, so insertion
    /// order never shows in the output.
    registered: IndexMap<String, TypeReference>,
}

impl ImportResolver {
    /// Create a resolver whose home package is the aspect's package.
    pub fn new(home_package: impl Into<String>) -> Self {
        Self {
            home_package: home_package.into(),
            registered: IndexMap::new(),
        }
    }

    /// The aspect's package.
    pub fn home_package(&self) -> &str {
        &self.home_package
    }

    /// Whether registering `ty` is useful and conflict-free.
    ///
    /// False when the simple name collides with a different already-registered
    /// type, and false for pointless additions: the home package, the default
    /// package, and `java.lang` need no import.
    pub fn is_addition_legal(&self, ty: &TypeReference) -> bool {
        if self.implicitly_in_scope(ty) {
            return false;
        }
        match self.registered_with_simple_name(ty.simple_name()) {
            Some(existing) => existing.fully_qualified_name() == ty.fully_qualified_name(),
            None => true,
        }
    }

    /// Register an import. Idempotent for an identical fully qualified name.
    ///
    /// # Panics
    ///
    /// Panics when [`is_addition_legal`](Self::is_addition_legal) is false;
    /// that is a caller bug, not a recoverable condition.
    pub fn add_import(&mut self, ty: &TypeReference) {
        assert!(
            self.is_addition_legal(ty),
            "illegal import addition: {}",
            ty.fully_qualified_name()
        );
        self.registered
            .entry(ty.fully_qualified_name().to_string())
            .or_insert_with(|| TypeReference::new(ty.fully_qualified_name()));
    }

    /// Whether `ty` must print fully qualified: its simple name collides with
    /// a different registered import. False when the type is implicitly in
    /// scope, already registered, or safely addable.
    pub fn is_fully_qualified_form_required(&self, ty: &TypeReference) -> bool {
        if self.implicitly_in_scope(ty) || self.is_registered(ty) {
            return false;
        }
        !self.is_addition_legal(ty)
    }

    /// The eager decision point used while writing a reference: returns true
    /// when the short form is usable, registering the import when one is
    /// needed and legal. Returns false when the reference must print fully
    /// qualified.
    pub fn use_short_form(&mut self, ty: &TypeReference) -> bool {
        if self.implicitly_in_scope(ty) || self.is_registered(ty) {
            return true;
        }
        if self.is_addition_legal(ty) {
            self.add_import(ty);
            return true;
        }
        false
    }

    /// Render `ty` including generic parameters, using the short form where
    /// permitted. Parameters are resolved recursively and may register
    /// imports of their own. When the outer reference requires the fully
    /// qualified form, the whole reference renders fully qualified.
    pub fn render_type(&mut self, ty: &TypeReference) -> String {
        if !self.use_short_form(ty) {
            return ty.fully_qualified_with_parameters();
        }
        let mut rendered = ty.simple_name().to_string();
        if !ty.parameters().is_empty() {
            let parameters: Vec<String> = ty
                .parameters()
                .iter()
                .map(|parameter| self.render_type(parameter))
                .collect();
            rendered.push('<');
            rendered.push_str(&parameters.join(", "));
            rendered.push('>');
        }
        rendered
    }

    /// All registered imports, ascending by fully qualified name.
    pub fn sorted_imports(&self) -> Vec<&TypeReference> {
        let mut imports: Vec<&TypeReference> = self.registered.values().collect();
        imports.sort();
        imports
    }

    fn implicitly_in_scope(&self, ty: &TypeReference) -> bool {
        let package = ty.package();
        package.is_empty() || package == self.home_package || package == IMPLICIT_PACKAGE
    }

    fn is_registered(&self, ty: &TypeReference) -> bool {
        self.registered.contains_key(ty.fully_qualified_name())
    }

    fn registered_with_simple_name(&self, simple_name: &str) -> Option<&TypeReference> {
        self.registered
            .values()
            .find(|existing| existing.simple_name() == simple_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_package_needs_no_import() {
        let mut resolver = ImportResolver::new("com.acme");
        let local = TypeReference::new("com.acme.Widget");

        assert!(!resolver.is_addition_legal(&local));
        assert!(!resolver.is_fully_qualified_form_required(&local));
        assert_eq!(resolver.render_type(&local), "Widget");
        assert!(resolver.sorted_imports().is_empty());
    }

    #[test]
    fn test_java_lang_needs_no_import() {
        let mut resolver = ImportResolver::new("com.acme");
        let long = TypeReference::new("java.lang.Long");

        assert!(!resolver.is_addition_legal(&long));
        assert_eq!(resolver.render_type(&long), "Long");
        assert!(resolver.sorted_imports().is_empty());
    }

    #[test]
    fn test_short_form_registers_import() {
        let mut resolver = ImportResolver::new("com.acme");
        let list = TypeReference::new("java.util.List");

        assert_eq!(resolver.render_type(&list), "List");
        let imports = resolver.sorted_imports();
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].fully_qualified_name(), "java.util.List");
    }

    #[test]
    fn test_simple_name_collision_forces_fully_qualified() {
        let mut resolver = ImportResolver::new("com.acme");
        let util_date = TypeReference::new("java.util.Date");
        let sql_date = TypeReference::new("java.sql.Date");

        assert_eq!(resolver.render_type(&util_date), "Date");
        assert!(!resolver.is_addition_legal(&sql_date));
        assert!(resolver.is_fully_qualified_form_required(&sql_date));
        assert_eq!(resolver.render_type(&sql_date), "java.sql.Date");

        // The loser never pollutes the import list
        let imports = resolver.sorted_imports();
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].fully_qualified_name(), "java.util.Date");
    }

    #[test]
    fn test_add_import_idempotent() {
        let mut resolver = ImportResolver::new("com.acme");
        let list = TypeReference::new("java.util.List");
        resolver.add_import(&list);
        resolver.add_import(&list);
        assert_eq!(resolver.sorted_imports().len(), 1);
    }

    #[test]
    #[should_panic(expected = "illegal import addition")]
    fn test_add_import_rejects_collision() {
        let mut resolver = ImportResolver::new("com.acme");
        resolver.add_import(&TypeReference::new("java.util.Date"));
        resolver.add_import(&TypeReference::new("java.sql.Date"));
    }

    #[test]
    fn test_sorted_imports_order_independent_of_insertion() {
        let mut resolver = ImportResolver::new("com.acme");
        resolver.add_import(&TypeReference::new("org.zzz.Tail"));
        resolver.add_import(&TypeReference::new("com.bank.Money"));
        resolver.add_import(&TypeReference::new("java.util.List"));

        let names: Vec<&str> = resolver
            .sorted_imports()
            .iter()
            .map(|ty| ty.fully_qualified_name())
            .collect();
        assert_eq!(
            names,
            ["com.bank.Money", "java.util.List", "org.zzz.Tail"]
        );
    }

    #[test]
    fn test_render_type_with_parameters() {
        let mut resolver = ImportResolver::new("com.acme");
        let ty = TypeReference::parameterized(
            "java.util.Map",
            [
                TypeReference::new("java.lang.String"),
                TypeReference::new("com.bank.Money"),
            ],
        );

        assert_eq!(resolver.render_type(&ty), "Map<String, Money>");
        let names: Vec<&str> = resolver
            .sorted_imports()
            .iter()
            .map(|ty| ty.fully_qualified_name())
            .collect();
        assert_eq!(names, ["com.bank.Money", "java.util.Map"]);
    }

    #[test]
    fn test_collision_renders_parameters_fully_qualified() {
        let mut resolver = ImportResolver::new("com.acme");
        resolver.add_import(&TypeReference::new("java.util.Date"));
        let colliding = TypeReference::parameterized(
            "java.sql.Date",
            [TypeReference::new("com.bank.Money")],
        );

        assert_eq!(
            resolver.render_type(&colliding),
            "java.sql.Date<com.bank.Money>"
        );
    }
}
