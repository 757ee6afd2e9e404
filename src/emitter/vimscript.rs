//! Vimscript emitter (`dpp.vim`).
//!
//! Unlike the other emitters, the output is wrapped in fixed bootstrap
//! boilerplate: a clone-if-absent guard for dpp.vim itself, the
//! `runtimepath` mutation, and the `dpp#begin`/`dpp#end` bracketing with
//! an install check at the end.

use super::json_array;
use crate::core::CanonicalPlugin;

const HEADER: &str = r#"" Migrated dpp.vim configuration
let s:dpp_base = expand('~/.cache/dpp')
let s:dpp_src = s:dpp_base .. '/repos/github.com/Shougo/dpp.vim'

if !isdirectory(s:dpp_src)
  execute '!git clone https://github.com/Shougo/dpp.vim' s:dpp_src
endif

execute 'set runtimepath^=' .. s:dpp_src

call dpp#begin(s:dpp_base)

call dpp#add('Shougo/dpp.vim')
call dpp#add('vim-denops/denops.vim')

"#;

const FOOTER: &str = r"
call dpp#end()

if dpp#check_install()
  call dpp#install()
endif
";

/// Generate a Vimscript configuration body.
pub(super) fn generate(plugins: &[CanonicalPlugin]) -> String {
    let mut content = String::from(HEADER);

    for plugin in plugins {
        if plugin.options.is_empty() {
            content.push_str(&format!("call dpp#add('{}')\n", plugin.repo));
        } else {
            content.push_str(&format!("call dpp#add('{}', {{\n", plugin.repo));

            if let Some(commands) = &plugin.options.on_cmd {
                content.push_str(&format!("\\   'on_cmd': {},\n", json_array(commands)));
            }
            if let Some(filetypes) = &plugin.options.on_ft {
                content.push_str(&format!("\\   'on_ft': {},\n", json_array(filetypes)));
            }

            content.push_str("\\ })\n");
        }
    }

    content.push_str(FOOTER);
    content
}
