#![allow(clippy::type_complexity)]

use bevy::{
    ecs::system::SystemState, math::vec2, picking::pointer::PointerButton, prelude::*,
    window::PrimaryWindow,
};

use crate::{
    autoplay::AutoPlayPlugin,
    grid::CellCoord,
    patterns::PATTERNS,
    prelude::*,
    session::{Action, Session},
    state::GameState,
};

const PATTERN_KEYS: [KeyCode; 6] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
];

/// Draws the session's board and routes pointer and keyboard input into it.
pub struct LifePlugin {
    session: Session,
}

impl LifePlugin {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Plugin for LifePlugin {
    fn build(&self, app: &mut App) {
        let grid = self.session.grid();
        app.insert_resource(self.session.clone())
            .insert_resource(BoardLayout::for_grid(grid.width(), grid.height()))
            .add_plugins(AutoPlayPlugin::default())
            .add_systems(
                OnEnter(GameState::Load),
                (load_meshes_and_materials, load_cell_board).chain(),
            )
            .add_systems(
                Update,
                (
                    handle_kbd,
                    (paint_cells, show_status).run_if(resource_changed::<Session>),
                )
                    .chain()
                    .run_if(not(in_state(GameState::Load))),
            );
    }
}

// ——> SYSTEMS

/// initialize meshes and materials in a resource
fn load_meshes_and_materials(
    world: &mut World,
    params: &mut SystemState<(
        ResMut<Assets<Mesh>>,
        ResMut<Assets<ColorMaterial>>,
        Res<BoardLayout>,
    )>,
) {
    let (mut meshes, mut materials, layout) = params.get_mut(world);
    let mesh_n_mats = MeshAndMats {
        cell: meshes.add(Rectangle::from_size(layout.cell_size)),
        border_vert: meshes.add(Rectangle::new(
            BORDER_WIDTH_PX,
            layout.pixel_size().y + 2.0 * BORDER_WIDTH_PX,
        )),
        border_horiz: meshes.add(Rectangle::new(
            layout.pixel_size().x + 2.0 * BORDER_WIDTH_PX,
            BORDER_WIDTH_PX,
        )),
        border: materials.add(ColorMaterial::from_color(BORDER_COLOR)),
        alive: materials.add(ColorMaterial::from_color(CELL_ALIVE_COLOR)),
        dead: materials.add(ColorMaterial::from_color(CELL_DEAD_COLOR)),
        hovered_alive: materials.add(ColorMaterial::from_color(CELL_HOVERED_ALIVE_COLOR)),
        hovered_dead: materials.add(ColorMaterial::from_color(CELL_HOVERED_DEAD_COLOR)),
    };
    world.insert_resource(mesh_n_mats);
}

/// spawn one entity per cell of the session's board, plus the border around it
fn load_cell_board(
    world: &mut World,
    params: &mut SystemState<(
        Res<MeshAndMats>,
        Res<BoardLayout>,
        Res<Session>,
        ResMut<NextState<GameState>>,
    )>,
) {
    let (mesh_n_mats, layout, session, _) = params.get_mut(world);
    let mesh_n_mats = mesh_n_mats.clone();
    let layout = *layout;

    let cells_to_spawn = session
        .grid()
        .generation()
        .iter()
        .map(|(coord, alive)| {
            (
                Cell,
                CellPos(coord),
                Mesh2d(mesh_n_mats.cell.clone()),
                MeshMaterial2d(mesh_n_mats.material(alive, false)),
                Transform::from_translation(layout.cell_coord_to_translation(coord))
                    .with_scale(layout.cell_scale.extend(1.0)),
            )
        })
        .collect::<Vec<_>>();
    world.spawn_batch(cells_to_spawn);

    world.add_observer(toggle_cell_on_press);
    world.add_observer(cells_hover_on::<Pointer<Over>>(true));
    world.add_observer(cells_hover_on::<Pointer<Out>>(false));

    // left, right, top, bottom
    let half = layout.pixel_size() * 0.5 + Vec2::splat(BORDER_WIDTH_PX * 0.5);
    let borders = [
        (mesh_n_mats.border_vert.clone(), vec2(-half.x, 0.0)),
        (mesh_n_mats.border_vert.clone(), vec2(half.x, 0.0)),
        (mesh_n_mats.border_horiz.clone(), vec2(0.0, half.y)),
        (mesh_n_mats.border_horiz.clone(), vec2(0.0, -half.y)),
    ]
    .map(|(mesh, offs)| {
        (
            Border,
            Mesh2d(mesh),
            MeshMaterial2d(mesh_n_mats.border.clone()),
            Transform::from_translation((layout.center + offs).extend(0.0)),
        )
    });
    world.spawn_batch(borders);

    let (_, _, _, mut game_state) = params.get_mut(world);
    game_state.set(GameState::Idle);
    info!("board of {}x{} cells ready", layout.width, layout.height);
}

/// Primary presses toggle the pressed cell.
fn toggle_cell_on_press(
    trigger: Trigger<Pointer<Down>>,
    cells: Query<&CellPos, With<Cell>>,
    mut session: ResMut<Session>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    let Ok(pos) = cells.get(trigger.entity()) else {
        return;
    };
    if let Err(err) = session.apply(Action::ToggleCell(**pos)) {
        warn!("ignored press: {err}");
    }
}

/// Returns an observer that marks a cell as hovered (or not) and updates its material.
fn cells_hover_on<E>(
    hovered: bool,
) -> impl Fn(
    Trigger<E>,
    Query<(&CellPos, &mut Hovered, &mut MeshMaterial2d<ColorMaterial>), With<Cell>>,
    Res<Session>,
    Res<MeshAndMats>,
) {
    move |trigger, mut query, session, mesh_n_mats| {
        if let Ok((pos, mut hover, mut material)) = query.get_mut(trigger.entity()) {
            let alive = session.grid().generation().get(**pos).unwrap_or(false);
            **hover = hovered;
            material.0 = mesh_n_mats.material(alive, hovered);
        }
    }
}

fn handle_kbd(keyboard_input: Res<ButtonInput<KeyCode>>, mut session: ResMut<Session>) {
    let Some(action) = action_for_keys(&keyboard_input) else {
        return;
    };
    if let Err(err) = session.apply(action) {
        warn!("{action:?} rejected: {err}");
    }
}

/// Enter toggles auto-play, Space/S steps, R randomizes, C clears, 1-6 load presets.
fn action_for_keys(keys: &ButtonInput<KeyCode>) -> Option<Action> {
    if keys.just_pressed(KeyCode::Enter) {
        Some(Action::ToggleAutoPlay)
    } else if keys.any_just_pressed([KeyCode::Space, KeyCode::KeyS]) {
        Some(Action::Step)
    } else if keys.just_pressed(KeyCode::KeyR) {
        Some(Action::Randomize)
    } else if keys.just_pressed(KeyCode::KeyC) {
        Some(Action::Clear)
    } else {
        PATTERN_KEYS
            .iter()
            .zip(PATTERNS)
            .find(|(key, _)| keys.just_pressed(**key))
            .map(|(_, pattern)| Action::LoadPattern(*pattern))
    }
}

fn paint_cells(
    session: Res<Session>,
    mesh_n_mats: Res<MeshAndMats>,
    mut cell_query: Query<(&CellPos, &Hovered, &mut MeshMaterial2d<ColorMaterial>), With<Cell>>,
) {
    let generation = session.grid().generation();
    for (pos, hovered, mut material) in cell_query.iter_mut() {
        let wanted = mesh_n_mats.material(generation.get(**pos).unwrap_or(false), **hovered);
        if material.0 != wanted {
            material.0 = wanted;
        }
    }
}

fn show_status(session: Res<Session>, mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    window.title = format!(
        "Game of Life | {:?} | generation {} | {} alive",
        session.mode(),
        session.generation(),
        session.grid().live_count()
    );
}

// ——> COMPONENTS

#[derive(Component)]
#[require(Hovered, Mesh2d)]
struct Cell;

#[derive(Component, Debug, Deref)]
struct CellPos(CellCoord);

#[derive(Component, Debug, Default, DerefMut, Deref)]
struct Hovered(bool);

#[derive(Component)]
#[require(Mesh2d)]
struct Border;

// ——> RESOURCES

/// hold handles for meshes and materials
#[derive(Resource, Clone)]
struct MeshAndMats {
    cell: Handle<Mesh>,
    border_vert: Handle<Mesh>,
    border_horiz: Handle<Mesh>,
    border: Handle<ColorMaterial>,
    alive: Handle<ColorMaterial>,
    dead: Handle<ColorMaterial>,
    hovered_alive: Handle<ColorMaterial>,
    hovered_dead: Handle<ColorMaterial>,
}

impl MeshAndMats {
    fn material(&self, alive: bool, hovered: bool) -> Handle<ColorMaterial> {
        match (alive, hovered) {
            (true, false) => self.alive.clone(),
            (false, false) => self.dead.clone(),
            (true, true) => self.hovered_alive.clone(),
            (false, true) => self.hovered_dead.clone(),
        }
    }
}

/// Where and how large the board is drawn.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BoardLayout {
    /// the center of the board
    pub center: Vec2,
    /// the amount of cells along x
    pub width: u32,
    /// the amount of cells along y
    pub height: u32,
    /// the size of each individual cell
    pub cell_size: Vec2,
    /// scale of each individual cell (should be 0.0 - 1.0)
    pub cell_scale: Vec2,
}

impl BoardLayout {
    pub fn for_grid(width: usize, height: usize) -> Self {
        Self {
            center: BOARD_POS,
            width: width as u32,
            height: height as u32,
            cell_size: CELL_SIZE_PX,
            cell_scale: CELL_SCALE,
        }
    }

    /// computes full size of the board in pixels
    #[inline]
    pub fn pixel_size(&self) -> Vec2 {
        vec2(
            self.width as f32 * self.cell_size.x,
            self.height as f32 * self.cell_size.y,
        )
    }

    /// Row 0 is drawn at the top, column 0 on the left.
    #[inline]
    pub fn cell_coord_to_translation(&self, coord: CellCoord) -> Vec3 {
        let top_left = self.center + vec2(-0.5, 0.5) * self.pixel_size();
        (top_left + vec2(coord.col as f32 + 0.5, -(coord.row as f32 + 0.5)) * self.cell_size)
            .extend(10.0)
    }
}
