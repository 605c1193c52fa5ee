//! Presentational atoms: each renders one element (or a labelled pair) from props.

mod checkbox;
mod icon;
mod icon_link;
mod logo_mark;
mod nav_link;
mod primary_button;
mod secondary_button;

pub use checkbox::{Checkbox, CheckboxProps};
pub use icon::{Icon, IconName, IconProps};
pub use icon_link::{IconLink, IconLinkProps};
pub use logo_mark::{DEFAULT_LOGO_SIZE, DEFAULT_LOGO_TITLE, LogoMark, LogoMarkProps, logo_style};
pub use nav_link::{NavLink, NavLinkProps, nav_link_style};
pub use primary_button::{ButtonVariant, PrimaryButton, PrimaryButtonProps, primary_button_style};
pub use secondary_button::{SecondaryButton, SecondaryButtonProps, secondary_button_style};
