use std::{fs, path::{Path, PathBuf}};

use anyhow::{ bail, Context, Result };
use glam::DVec3;
use serde::Deserialize;

use crate::{
    canvas::Pixel,
    light::{Emitter, Light},
    material::Color,
    scene::{Scene, SceneKind, DEFAULT_HEIGHT, DEFAULT_WIDTH}
};

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SphereSettings {
    pub center: Option<[f64; 3]>,
    pub radius: Option<f64>
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LightSettings {
    pub position: Option<[f64; 3]>,
    pub direction: Option<[f64; 3]>,
    pub intensity: Option<[f64; 3]>
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MaterialSettings {
    pub diffuse: Option<[f64; 3]>,
    pub specular: Option<[f64; 3]>,
    pub shininess: Option<f64>
}

/// Settings given on the command line. They win over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub scene: Option<SceneKind>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub output: Option<PathBuf>,
    pub headless: bool
}

/// Optional overrides on top of a scene preset, read from a TOML file
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub scene: Option<SceneKind>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub title: Option<String>,
    pub output: Option<PathBuf>,
    pub background: Option<[u8; 3]>,

    #[serde(default)]
    pub sphere: SphereSettings,
    #[serde(default)]
    pub light: LightSettings,
    #[serde(default)]
    pub material: MaterialSettings
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("invalid config")?;
        config.validate()?;

        Ok(config)
    }

    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("couldn't read config file {}", path.display()))?;

        Config::parse(&text).with_context(|| format!("in config file {}", path.display()))
    }

    /// Applies command line settings on top of the file and checks the result
    pub fn merge_cli(mut self, cli: CliOverrides) -> Result<Self> {
        self.scene = cli.scene.or(self.scene);
        self.width = cli.width.or(self.width);
        self.height = cli.height.or(self.height);
        self.output = cli.output.or(self.output);
        self.validate()?;

        if cli.headless && self.output.is_none() {
            bail!("nothing to do: --headless needs --output");
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, size) in [("width", self.width), ("height", self.height)] {
            if let Some(size) = size {
                if size < 2 {
                    bail!("{} must be at least 2, got {}", name, size);
                }
            }
        }

        if let Some(radius) = self.sphere.radius {
            if !(radius > 0.0) {
                bail!("sphere radius must be positive, got {}", radius);
            }
        }

        if let Some(shininess) = self.material.shininess {
            if !(shininess >= 0.0) {
                bail!("shininess must not be negative, got {}", shininess);
            }
        }

        if self.light.position.is_some() && self.light.direction.is_some() {
            bail!("light can't have both a position and a direction");
        }

        let vectors = [
            ("sphere center", self.sphere.center),
            ("light position", self.light.position),
            ("light direction", self.light.direction),
            ("light intensity", self.light.intensity),
            ("diffuse color", self.material.diffuse),
            ("specular color", self.material.specular)
        ];
        for (name, vector) in vectors {
            if let Some(vector) = vector {
                if !vector.iter().all(|c| c.is_finite()) {
                    bail!("{} must be finite, got {:?}", name, vector);
                }
            }
        }
        if let Some(shininess) = self.material.shininess {
            if !shininess.is_finite() {
                bail!("shininess must be finite, got {}", shininess);
            }
        }

        if let Some(direction) = self.light.direction {
            if DVec3::from(direction).length_squared() == 0.0 {
                bail!("light direction must not be zero, got {:?}", direction);
            }
        }

        Ok(())
    }

    /// Builds the scene: preset for the chosen kind, then every override present in the config
    pub fn scene(&self, fallback: SceneKind) -> Scene {
        let kind = self.scene.unwrap_or(fallback);
        let mut scene = Scene::preset(
            kind,
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT)
        );

        if let Some(title) = &self.title {
            scene.title = title.clone();
        }
        if let Some([r, g, b]) = self.background {
            scene.background = Pixel(r, g, b);
        }

        if let Some(center) = self.sphere.center {
            scene.sphere.pos = DVec3::from(center);
        }
        if let Some(radius) = self.sphere.radius {
            scene.sphere.radius = radius;
        }

        let intensity = self.light.intensity.map(Color::from).unwrap_or(scene.light.intensity);
        let emitter = self.light.emitter().unwrap_or(scene.light.emitter);
        scene.light = Light { emitter, intensity };

        if let Some(diffuse) = self.material.diffuse {
            scene.material.diffuse = diffuse.into();
        }
        if let Some(specular) = self.material.specular {
            scene.material.specular = specular.into();
        }
        if let Some(shininess) = self.material.shininess {
            scene.material.shininess = shininess;
        }

        scene
    }
}

impl LightSettings {
    pub fn emitter(&self) -> Option<Emitter> {
        match (self.position, self.direction) {
            (Some(position), _) => Some(Emitter::Point { position: position.into() }),
            (None, Some(direction)) => Some(Light::directional(direction.into(), Color::WHITE).emitter),
            (None, None) => None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_the_preset() {
        let config = Config::parse("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.scene(SceneKind::LookAt), Scene::look_at(DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let config = Config::parse(r#"
            scene = "pinhole"
            width = 64
            height = 32
            background = [1, 2, 3]

            [sphere]
            radius = 0.25

            [light]
            direction = [0.0, 0.0, 2.0]

            [material]
            shininess = 8.0
        "#).unwrap();

        let scene = config.scene(SceneKind::LookAt);

        assert_eq!(scene.kind, SceneKind::Pinhole);
        assert_eq!((scene.width, scene.height), (64, 32));
        assert_eq!(scene.background, Pixel(1, 2, 3));
        assert_eq!(scene.sphere.radius, 0.25);
        assert_eq!(scene.sphere.pos, Scene::pinhole(64, 32).sphere.pos);
        assert_eq!(scene.light.emitter, Emitter::Directional { direction: DVec3::Z });
        assert_eq!(scene.light.intensity, Color::splat(0.7));
        assert_eq!(scene.material.shininess, 8.0);
        assert_eq!(scene.material.diffuse, Color::new(0.8, 0.1, 0.1));
    }

    #[test]
    fn bundled_config_matches_look_at_preset() {
        let config = Config::parse(include_str!("../data/config.toml")).unwrap();

        assert_eq!(config.output, Some(PathBuf::from("sphere.png")));
        assert_eq!(config.scene(SceneKind::Pinhole), Scene::look_at(800, 600));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(Config::parse("width = 1").is_err());
        assert!(Config::parse("[sphere]\nradius = 0.0").is_err());
        assert!(Config::parse("[material]\nshininess = -1.0").is_err());
        assert!(Config::parse("[light]\nposition = [0.0, 1.0, 0.0]\ndirection = [0.0, 1.0, 0.0]").is_err());
        assert!(Config::parse("scene = \"cornell-box\"").is_err());
        assert!(Config::parse("antialiasing = true").is_err());
    }

    #[test]
    fn rejects_degenerate_vectors() {
        assert!(Config::parse("[light]\ndirection = [0.0, 0.0, 0.0]").is_err());
        assert!(Config::parse("[light]\ndirection = [0.0, nan, 1.0]").is_err());
        assert!(Config::parse("[light]\nposition = [inf, 0.0, 0.0]").is_err());
        assert!(Config::parse("[sphere]\ncenter = [nan, 0.0, 0.0]").is_err());
        assert!(Config::parse("[material]\ndiffuse = [1.0, -inf, 0.0]").is_err());
        assert!(Config::parse("[material]\nshininess = inf").is_err());

        let config = Config::parse("[light]\ndirection = [0.0, 0.0, 0.5]").unwrap();
        let scene = config.scene(SceneKind::Pinhole);

        assert_eq!(scene.light.emitter, Emitter::Directional { direction: DVec3::Z });
    }

    #[test]
    fn command_line_wins_over_file() {
        let file = Config::parse("scene = \"look-at\"\nwidth = 64\nheight = 32\noutput = \"file.png\"").unwrap();

        let merged = file.clone().merge_cli(CliOverrides { width: Some(10), ..Default::default() }).unwrap();
        assert_eq!(merged.width, Some(10));
        assert_eq!(merged.height, Some(32));
        assert_eq!(merged.scene, Some(SceneKind::LookAt));
        assert_eq!(merged.output, Some(PathBuf::from("file.png")));

        let merged = file.merge_cli(CliOverrides {
            scene: Some(SceneKind::Pinhole),
            output: Some(PathBuf::from("cli.png")),
            ..Default::default()
        }).unwrap();
        assert_eq!(merged.scene(SceneKind::LookAt).kind, SceneKind::Pinhole);
        assert_eq!(merged.output, Some(PathBuf::from("cli.png")));
    }

    #[test]
    fn merged_settings_are_validated() {
        let small = CliOverrides { width: Some(1), ..Default::default() };
        assert!(Config::default().merge_cli(small).is_err());

        let headless = CliOverrides { headless: true, ..Default::default() };
        assert!(Config::default().merge_cli(headless.clone()).is_err());

        let with_output = Config { output: Some(PathBuf::from("out.png")), ..Default::default() };
        assert!(with_output.merge_cli(headless).is_ok());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load("does/not/exist.toml").unwrap_err();

        assert!(format!("{:#}", err).contains("does/not/exist.toml"));
    }
}
