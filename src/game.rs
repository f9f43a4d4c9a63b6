use std::collections::VecDeque;

use crate::animation::{KeyframeSequence, TokenAnimator};
use crate::board::{self, BoardState, Category, PlacementConflict, PresetError};
use crate::camera::{Camera, CameraError};
use crate::config::GameConfig;
use crate::math::{BoardCell, GridMapper, GroundIntersector, PickingError};
use crate::traits::{Behavior, SceneSink, TokenSpawn};

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid camera: {0}")]
    Camera(#[from] CameraError),
    #[error("invalid picking settings: {0}")]
    Picking(#[from] PickingError),
    #[error("cannot load starting layout: {0}")]
    Preset(#[from] PresetError),
    #[error("box size must be at least 1")]
    EmptyBoard,
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),
}

/// What a single click did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementResult {
    Accepted {
        cell: BoardCell,
        category: Category,
    },
    Rejected {
        cell: BoardCell,
        category: Category,
        conflict: PlacementConflict,
    },
    /// The click missed the board; nothing happened.
    OutOfBounds,
}

impl PlacementResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlacementResult::Accepted { .. })
    }
}

/// Owns the board and turns clicks into placements.
#[derive(Debug)]
pub struct BoardGame {
    camera: Camera,
    intersector: GroundIntersector,
    mapper: GridMapper,
    animator: TokenAnimator,
    board: BoardState,
    target_per_category: usize,
    selected: Category,
    pending: VecDeque<TokenSpawn>,
    completion_shown: bool,
}

impl BoardGame {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let board = config.preset.board_sized(config.grid.box_size)?;
        log::info!("Starting from preset {} ({} tokens)", config.preset, board.total());
        Self::with_board(config, board)
    }

    /// Starts from an explicit board instead of the configured preset.
    pub fn with_board(config: &GameConfig, board: BoardState) -> Result<Self, GameError> {
        if board.box_size() == 0 {
            return Err(GameError::EmptyBoard);
        }
        let cell_size = config.grid.cell_size;
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GameError::InvalidCellSize(cell_size));
        }
        let target_per_category = config.target_per_category.unwrap_or_else(|| board.side());
        Ok(Self {
            camera: Camera::new(config.camera.clone())?,
            intersector: config.picking.intersector()?,
            mapper: GridMapper::new(cell_size, board.side()),
            animator: config.animation,
            board,
            target_per_category,
            selected: Category::FIRST,
            pending: VecDeque::new(),
            completion_shown: false,
        })
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    pub fn selected_category(&self) -> Category {
        self.selected
    }

    pub fn select_category(&mut self, category: Category) {
        log::debug!("Selected category {category}");
        self.selected = category;
    }

    pub fn is_won(&self) -> bool {
        board::is_won(&self.board, self.target_per_category)
    }

    /// Spawn requests waiting for the sink to become ready.
    pub fn pending_spawns(&self) -> usize {
        self.pending.len()
    }

    /// Board cell under pixel `(x, y)`, if the click lands on the board.
    pub fn pick(&self, x: f32, y: f32) -> Option<BoardCell> {
        let ray = self.camera.cast_ray(x, y);
        let Some(point) = self.intersector.intersect(&ray) else {
            log::debug!("Click ({x}, {y}) never reaches the ground");
            return None;
        };
        let cell = self.mapper.map_to_grid(point);
        log::debug!("Click ({x}, {y}) -> ground {point:?} -> cell {cell:?}");
        cell
    }

    pub fn handle_click(&mut self, x: f32, y: f32, sink: &mut dyn SceneSink) -> PlacementResult {
        match self.pick(x, y) {
            Some(cell) => self.place(cell, sink),
            None => PlacementResult::OutOfBounds,
        }
    }

    /// Tries to put the selected category on `cell`.
    pub fn place(&mut self, cell: BoardCell, sink: &mut dyn SceneSink) -> PlacementResult {
        let category = self.selected;
        let target = self.mapper.cell_center(cell);

        let (result, animation) = match board::check_placement(&self.board, cell, category) {
            Ok(()) => {
                self.board.insert(cell, category);
                log::info!("Placed {category} at {cell}");
                (
                    PlacementResult::Accepted { cell, category },
                    self.animator.accepted(target),
                )
            }
            Err(PlacementConflict::OutsideBoard(_)) => return PlacementResult::OutOfBounds,
            Err(conflict) => {
                log::info!("Rejected {category} at {cell}: {conflict}");
                (
                    PlacementResult::Rejected {
                        cell,
                        category,
                        conflict,
                    },
                    self.animator.rejected(target),
                )
            }
        };

        self.emit(self.spawn_request(cell, category, Some(animation)), sink);

        if result.is_accepted() && !self.completion_shown && self.is_won() {
            log::info!("Board complete");
            self.completion_shown = true;
            sink.show_completion_message();
        }
        result
    }

    fn spawn_request(
        &self,
        cell: BoardCell,
        category: Category,
        animation: Option<KeyframeSequence>,
    ) -> TokenSpawn {
        let position = self.mapper.cell_center(cell);
        TokenSpawn {
            position,
            color: category.color(),
            rest: self.animator.seated(position),
            animation,
        }
    }

    fn emit(&mut self, token: TokenSpawn, sink: &mut dyn SceneSink) {
        if sink.is_ready() {
            self.flush(sink);
            sink.spawn_token(token);
        } else {
            log::warn!("Token mesh not loaded yet, deferring spawn at {:?}", token.position);
            self.pending.push_back(token);
        }
    }

    fn flush(&mut self, sink: &mut dyn SceneSink) {
        while let Some(token) = self.pending.pop_front() {
            sink.spawn_token(token);
        }
    }
}

impl Behavior for BoardGame {
    fn start(&mut self, sink: &mut dyn SceneSink) {
        let seeded: Vec<_> = self
            .board
            .iter()
            .map(|(category, cell)| self.spawn_request(cell, category, None))
            .collect();
        for token in seeded {
            self.emit(token, sink);
        }
    }

    fn update(&mut self, sink: &mut dyn SceneSink) {
        if !self.pending.is_empty() && sink.is_ready() {
            log::debug!("Spawning {} deferred tokens", self.pending.len());
            self.flush(sink);
        }
    }
}
