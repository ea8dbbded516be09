use crate::error::BlindError;
use crate::host::Host;
use crate::options::BlindOptions;
use crate::state::BlindState;
use crate::toggle::Toggle;

/// Wrap `element` in a blind with the default `blind` marker classes.
///
/// Returns the new container:
///
/// ```text
/// container        (blind)
///   title bar      (blind__title, text = element's title attribute)
///   content        (blind__content blind__content--closed)
///     element
/// ```
///
/// `element` is moved out of its current parent. The title is read once;
/// later changes to the attribute are not reflected.
///
/// # Errors
///
/// [`BlindError::InvalidArgument`] if `element` is not an element. Nothing
/// is created in that case.
pub fn construct<H: Host>(
    host: &mut H,
    element: impl Into<H::Value>,
) -> Result<H::Node, BlindError> {
    construct_with(host, element, &BlindOptions::default())
}

/// Like [`construct`], with marker classes and tag taken from `options`.
///
/// # Errors
///
/// [`BlindError::InvalidOptions`] if `options` fails
/// [`BlindOptions::validate`], [`BlindError::InvalidArgument`] as for
/// [`construct`]. Both are checked before any node is created.
pub fn construct_with<H: Host>(
    host: &mut H,
    element: impl Into<H::Value>,
    options: &BlindOptions,
) -> Result<H::Node, BlindError> {
    options.validate()?;
    let source = host
        .as_element(&element.into())
        .ok_or(BlindError::InvalidArgument)?;

    let container = host.create_element(&options.tag);
    host.add_class(container, options.container_class());

    let title = host.create_element(&options.tag);
    host.add_class(title, &options.title_class());
    let text = host.attribute(source, "title").unwrap_or_default();
    host.set_text(title, &text);
    host.append_child(container, title);

    let content = host.create_element(&options.tag);
    host.add_class(content, &options.content_class());
    host.add_class(content, &BlindState::Closed.class(options));
    host.append_child(container, content);

    host.append_child(content, source);

    host.on_click(title, Box::new(Toggle::new(content, options.clone())));

    log::debug!("[blind] built {container:?} around {source:?} (title={text:?})");
    Ok(container)
}

/// Current state of a blind built with `options`, read from its markers.
///
/// Returns `None` if `container` is not such a blind or its content
/// wrapper does not carry exactly one state marker.
pub fn state<H: Host>(host: &H, container: H::Node, options: &BlindOptions) -> Option<BlindState> {
    if !host.has_class(container, options.container_class()) {
        return None;
    }
    let content_class = options.content_class();
    let content = host
        .children(container)
        .into_iter()
        .find(|&c| host.has_class(c, &content_class))?;

    let closed = host.has_class(content, &BlindState::Closed.class(options));
    let open = host.has_class(content, &BlindState::Open.class(options));
    match (closed, open) {
        (true, false) => Some(BlindState::Closed),
        (false, true) => Some(BlindState::Open),
        _ => None,
    }
}
