use crate::models::common::eq_update;
use crate::models::player::Player;
use crate::models::settings_store::SettingsStore;
use crate::models::style_projection::StyleProjection;
use crate::runtime::msg::Msg;
use crate::runtime::{Effect, Effects, Env, Model, Update};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerSessionField {
    Settings,
    Styles,
    Player,
}

/// One mounted player: its settings, the styles projected from them and the loaded media.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerSession {
    pub settings: SettingsStore,
    pub styles: StyleProjection,
    pub player: Player,
}

impl PlayerSession {
    pub fn new<E: Env>() -> (Self, Effects) {
        let settings = SettingsStore::load::<E>();
        let styles = StyleProjection::new(settings.settings());
        let session = PlayerSession {
            settings,
            styles,
            player: Player::default(),
        };
        (session, Effects::none().unchanged())
    }
    fn update_styles(&mut self, settings_effects: &Effects) -> Effects {
        if settings_effects.has_changed {
            eq_update(
                &mut self.styles,
                StyleProjection::new(self.settings.settings()),
            )
        } else {
            Effects::none().unchanged()
        }
    }
}

impl<E: Env + 'static> Model<E> for PlayerSession {
    type Field = PlayerSessionField;

    fn update(&mut self, msg: &Msg) -> (Vec<Effect>, Vec<Self::Field>) {
        let settings_effects = Update::<E>::update(&mut self.settings, msg);
        let styles_effects = self.update_styles(&settings_effects);
        let player_effects = Update::<E>::update(&mut self.player, msg);
        collect_effects(vec![
            (PlayerSessionField::Settings, settings_effects),
            (PlayerSessionField::Styles, styles_effects),
            (PlayerSessionField::Player, player_effects),
        ])
    }
    fn update_field(&mut self, msg: &Msg, field: &Self::Field) -> (Vec<Effect>, Vec<Self::Field>) {
        match field {
            PlayerSessionField::Settings | PlayerSessionField::Styles => {
                let settings_effects = Update::<E>::update(&mut self.settings, msg);
                let styles_effects = self.update_styles(&settings_effects);
                collect_effects(vec![
                    (PlayerSessionField::Settings, settings_effects),
                    (PlayerSessionField::Styles, styles_effects),
                ])
            }
            PlayerSessionField::Player => collect_effects(vec![(
                PlayerSessionField::Player,
                Update::<E>::update(&mut self.player, msg),
            )]),
        }
    }
}

fn collect_effects(
    updates: Vec<(PlayerSessionField, Effects)>,
) -> (Vec<Effect>, Vec<PlayerSessionField>) {
    updates.into_iter().fold(
        (vec![], vec![]),
        |(mut effects, mut fields), (field, field_effects)| {
            if field_effects.has_changed {
                fields.push(field);
            }
            effects.extend(field_effects);
            (effects, fields)
        },
    )
}
