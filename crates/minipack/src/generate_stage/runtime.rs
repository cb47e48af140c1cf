/// Opens the bundle: a function receiving the module registry
/// `{ [id]: [function (require, module, exports) {}, { [specifier]: id }] }`.
///
/// `load` caches a module record before running its factory, so a cyclic `require` receives the
/// partially populated `module.exports`.
pub const RUNTIME_PRELUDE: &str = r#"(function (modules) {
  var cache = {};

  function load(id) {
    if (Object.prototype.hasOwnProperty.call(cache, id)) {
      return cache[id].exports;
    }
    var module = (cache[id] = { exports: {} });
    var definition = modules[id];
    var mapping = definition[1];
    function require(specifier) {
      if (!Object.prototype.hasOwnProperty.call(mapping, specifier)) {
        throw new Error("Cannot find module '" + specifier + "'");
      }
      return load(mapping[specifier]);
    }
    definition[0].call(module.exports, require, module, module.exports);
    return module.exports;
  }
"#;

pub const MODULE_FACTORY_OPEN: &str = "function (require, module, exports) {";
