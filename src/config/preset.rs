use {
  super::{AnimationConfig, CanvasConfig, GridConfig, PatternConfig, ShapeConfig},
  crate::{color::Palette, error::Result},
  serde::{Deserialize, Serialize},
  serde_json::Value,
  std::path::Path
};

/// The whole persisted state. Serialized as
/// `{ grid, shape, pattern, animation, palette: { colors }, canvas }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
  pub grid: GridConfig,
  pub shape: ShapeConfig,
  pub pattern: PatternConfig,
  pub animation: AnimationConfig,
  pub palette: Palette,
  pub canvas: CanvasConfig,
}

impl Preset {
  /// Parse a preset, filling whatever it omits from [`Preset::default`].
  pub fn from_json(json: &str) -> Result<Self> {
    Preset::default().merge_json(json)
  }

  /// Overlay a (possibly partial) preset onto `self`.
  ///
  /// Objects merge key by key at every depth; arrays and scalars replace; `null` keeps the
  /// current value. Unknown keys are ignored.
  pub fn merge_json(&self, json: &str) -> Result<Self> {
    self.merge_value(serde_json::from_str(json)?)
  }

  pub fn merge_value(&self, patch: Value) -> Result<Self> {
    let mut state = serde_json::to_value(self)?;
    merge(&mut state, patch);
    Ok(serde_json::from_value(state)?)
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    Preset::default().merge_file(path)
  }

  pub fn merge_file(&self, path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    log::debug!("loading preset {}", path.display());
    self.merge_json(&std::fs::read_to_string(path)?)
  }

  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, self.to_json()?)?;
    Ok(())
  }
}

fn merge(state: &mut Value, patch: Value) {
  match (state, patch) {
    (_, Value::Null) => {}
    (Value::Object(state), Value::Object(patch)) => patch.into_iter()
      .for_each(|(key, value)| merge(state.entry(key).or_insert(Value::Null), value)),
    (state, patch) => *state = patch
  }
}
