use crate::{
    constants::{DEFAULT_BACKGROUND_COLOR, DEFAULT_FOREGROUND_COLOR, DEFAULT_MAX_COLOR, DEFAULT_PICTURE_DIMENSIONS},
    matrix::{self, Matrix},
    render::{
        Picture,
        edge_list::{EdgeList, add_edge, render_edges},
    },
};
use super::{
    error::ScriptError,
    parser::{Command, Parser},
};

pub struct ScriptContext {
    edges: EdgeList,
    transform: Matrix,
    color: (usize, usize, usize),
}

impl ScriptContext {
    fn new() -> Self {
        Self {
            edges: vec![],
            transform: matrix::identity(),
            color: DEFAULT_FOREGROUND_COLOR,
        }
    }

    // every fold goes through here so the newest transformation is applied last
    fn apply_transformation(&mut self, elementary: Matrix) {
        matrix::multiply(&elementary, &mut self.transform);
    }

    fn render_edges(&self) -> Picture {
        let mut picture = Picture::new(
            DEFAULT_PICTURE_DIMENSIONS.0,
            DEFAULT_PICTURE_DIMENSIONS.1,
            DEFAULT_MAX_COLOR,
            &DEFAULT_BACKGROUND_COLOR,
        );

        render_edges(&self.edges, &mut picture, &self.color);
        picture
    }
}

pub fn evaluate_script(lines: Vec<String>) -> Result<ScriptContext, ScriptError> {
    let mut context = ScriptContext::new();
    let mut parser = Parser::new(lines);

    // commands run as soon as they are read so earlier output survives a later error
    while let Some(command) = parser.next_command()? {
        log::debug!("line {}: {:?}", parser.cursor(), command);
        execute_command(command, &mut context)?;
    }

    Ok(context)
}

fn execute_command(command: Command, context: &mut ScriptContext) -> Result<(), ScriptError> {
    match command {
        Command::Line { x0, y0, z0, x1, y1, z1 } => {
            add_edge(&mut context.edges, x0, y0, z0, x1, y1, z1);
        }

        Command::Ident => {
            context.transform = matrix::identity();
        }

        Command::Scale { a, b, c } => {
            context.apply_transformation(matrix::dilation(a, b, c));
        }

        Command::Move { a, b, c } => {
            context.apply_transformation(matrix::translation(a, b, c));
        }

        Command::Rotate { axis, degrees } => {
            context.apply_transformation(matrix::rotation(axis, degrees));
        }

        Command::Apply => {
            matrix::multiply(&context.transform, &mut context.edges);
        }

        Command::Display => {
            context.render_edges().display().map_err(ScriptError::Raster)?;
        }

        Command::Save { file_path } => {
            context.render_edges().save_as_file(&file_path).map_err(ScriptError::Raster)?;
        }
    }

    Ok(())
}
