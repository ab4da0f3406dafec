//! Compile-and-link helper shared by every sketch.
//!
//! A failed compile or link is fatal: the failed object is deleted and the
//! error returned, so a program handle is only ever produced for a
//! successfully linked pair.

use std::fmt;

use thiserror::Error;

/// Programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shader compilation or program linking failure.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    #[error("{stage} shader failed to compile:\n{log}")]
    CompileError { stage: ShaderStage, log: String },

    #[error("program failed to link:\n{0}")]
    LinkError(String),
}

/// Numbers the lines of `source` and appends the driver's `log`, so the
/// `0:LINE:` references in the log can be matched against the GLSL.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let width = lines.len().max(1).to_string().len();

    let numbered = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, _) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

/// Compiles one stage.
///
/// # Errors
///
/// Returns `ShaderError::CompileError` with the numbered source and info log.
#[allow(unsafe_code)]
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow marks raw GL calls unsafe. The stage enum is valid and
    // the shader handle is deleted on the failure path.
    let shader = unsafe {
        gl.create_shader(stage.gl_enum())
            .map_err(|log| ShaderError::CompileError { stage, log })?
    };

    let compiled = unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        gl.get_shader_compile_status(shader)
    };

    if compiled {
        return Ok(shader);
    }

    let info_log = unsafe { gl.get_shader_info_log(shader) };
    unsafe { gl.delete_shader(shader) };
    log::error!("{stage} shader failed to compile: {info_log}");
    Err(ShaderError::CompileError {
        stage,
        log: format_shader_error(source, &info_log),
    })
}

/// Links two compiled stages into a program, detaching them afterwards.
///
/// # Errors
///
/// Returns `ShaderError::LinkError` with the program info log.
#[allow(unsafe_code)]
pub fn link_program(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    // SAFETY: both shader handles come from successful compile_shader calls;
    // the program is deleted on the failure path.
    let program = unsafe { gl.create_program().map_err(ShaderError::LinkError)? };

    let linked = unsafe {
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.get_program_link_status(program)
    };

    if linked {
        return Ok(program);
    }

    let info_log = unsafe { gl.get_program_info_log(program) };
    unsafe { gl.delete_program(program) };
    log::error!("program failed to link: {info_log}");
    Err(ShaderError::LinkError(info_log))
}

/// Compiles a vertex/fragment source pair and links it.
///
/// Stage objects are deleted whatever the outcome; on success only the
/// program survives.
///
/// # Errors
///
/// Returns the first compile error, or the link error.
#[allow(unsafe_code)]
pub fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
    let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_src) {
        Ok(shader) => shader,
        Err(e) => {
            // SAFETY: vertex is a live handle from compile_shader.
            unsafe { gl.delete_shader(vertex) };
            return Err(e);
        }
    };

    let result = link_program(gl, vertex, fragment);

    // SAFETY: both handles are live; a linked program keeps its own copy.
    unsafe {
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);
    }

    result
}
