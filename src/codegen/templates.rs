//! Component templates, one per target framework.
//!
//! Generated styling always routes through CSS custom properties backed
//! by the token pipeline -- the templates must themselves pass the
//! governance rules they accompany.

use super::category_prop;
use crate::model::{Framework, TokenCategory};

const REACT_COMPONENT: &str = r#"import React from 'react';

export interface {name}Props {
  /** Visual variant, resolved through the token theme. */
  variant?: 'primary' | 'secondary';
  children?: React.ReactNode;
{token_props}}

export const {name}: React.FC<{name}Props> = ({ variant = 'primary', children }) => {
  return (
    <div className={`{name_lower} {name_lower}--${variant}`}>
      {children}
    </div>
  );
};

export default {name};
"#;

const VUE_COMPONENT: &str = r#"<template>
  <div :class="['{name_lower}', `{name_lower}--${variant}`]">
    <slot />
  </div>
</template>

<script setup lang="ts">
withDefaults(defineProps<{
  /** Visual variant, resolved through the token theme. */
  variant?: 'primary' | 'secondary';
{token_props}}>(), {
  variant: 'primary',
});
</script>

<style scoped>
.{name_lower} {
  color: var(--color-primary-base);
  padding: var(--spacing-scale-md);
  font-family: var(--typography-body-family);
}
</style>
"#;

const SVELTE_COMPONENT: &str = r#"<script lang="ts">
  interface Props {
    variant?: 'primary' | 'secondary';
{token_props}  }

  let { variant = 'primary' }: Props = $props();
</script>

<div class="{name_lower} {name_lower}--{variant}">
  <slot />
</div>

<style>
  .{name_lower} {
    color: var(--color-primary-base);
    padding: var(--spacing-scale-md);
  }
</style>
"#;

const ANGULAR_COMPONENT: &str = r#"import { Component, Input } from '@angular/core';

export interface {name}TokenOverrides {
{token_props}}

@Component({
  selector: 'app-{name_lower}',
  template: `
    <div class="{name_lower} {name_lower}--{{ variant }}">
      <ng-content></ng-content>
    </div>
  `,
})
export class {name}Component {
  @Input() variant: 'primary' | 'secondary' = 'primary';
  @Input() tokenOverrides?: {name}TokenOverrides;
}
"#;

const WEBC_COMPONENT: &str = r#"export interface {name}Props {
  variant?: 'primary' | 'secondary';
{token_props}}

const TEMPLATE = document.createElement('template');
TEMPLATE.innerHTML = `
  <div class="{name_lower}" part="base">
    <slot></slot>
  </div>
`;

export class {name} extends HTMLElement {
  static observedAttributes = ['variant'];

  connectedCallback() {
    this.appendChild(TEMPLATE.content.cloneNode(true));
    this.syncVariant();
  }

  attributeChangedCallback() {
    this.syncVariant();
  }

  private syncVariant() {
    const variant = this.getAttribute('variant') ?? 'primary';
    this.querySelector('.{name_lower}')?.classList.add(`{name_lower}--${variant}`);
  }
}

customElements.define('{name_lower}-element', {name});
"#;

/// Render the component source for `framework`, substituting `name` at
/// every placeholder occurrence and appending one prop declaration per
/// requested token category. Pure function -- identical arguments yield
/// byte-identical output.
pub fn render_component(name: &str, framework: Framework, categories: &[TokenCategory]) -> String {
    let token_props: String = categories.iter().map(|cat| category_prop(*cat)).collect();
    let template = match framework {
        Framework::React => REACT_COMPONENT,
        Framework::Vue => VUE_COMPONENT,
        Framework::Svelte => SVELTE_COMPONENT,
        Framework::Angular => ANGULAR_COMPONENT,
        Framework::WebC => WEBC_COMPONENT,
    };
    template
        .replace("{token_props}", &token_props)
        .replace("{name_lower}", &name.to_lowercase())
        .replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::super::DEFAULT_CATEGORIES;
    use super::*;

    #[test]
    fn test_name_substituted_everywhere() {
        for fw in Framework::ALL {
            let source = render_component("Button", fw, &[TokenCategory::Color]);
            assert!(!source.contains("{name}"), "unreplaced name in {:?}", fw);
            assert!(!source.contains("{name_lower}"), "unreplaced lower in {:?}", fw);
            assert!(!source.contains("{token_props}"), "unreplaced props in {:?}", fw);
            assert!(source.contains("Button"), "name missing in {:?}", fw);
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let a = render_component("Card", Framework::Vue, &DEFAULT_CATEGORIES);
        let b = render_component("Card", Framework::Vue, &DEFAULT_CATEGORIES);
        assert_eq!(a, b);
    }

    #[test]
    fn test_vue_template_declares_variant_prop() {
        let source = render_component("Badge", Framework::Vue, &DEFAULT_CATEGORIES);
        assert!(source.contains("variant?:"));
        assert!(source.contains(".badge {"));
    }

    #[test]
    fn test_category_props_appended_in_order() {
        let source = render_component(
            "Chip",
            Framework::React,
            &[TokenCategory::Spacing, TokenCategory::Color],
        );
        let spacing = source.find("spacingToken?:").expect("spacing prop present");
        let color = source.find("colorToken?:").expect("color prop present");
        assert!(spacing < color);
        assert!(!source.contains("motionToken"));
    }

    #[test]
    fn test_empty_categories_still_renders() {
        let source = render_component("Plain", Framework::Svelte, &[]);
        assert!(source.contains("variant?: 'primary' | 'secondary';"));
        assert!(!source.contains("Token?:"));
    }

    #[test]
    fn test_templates_pass_their_own_rules() {
        use crate::governance::rules::VALIDATION_RULES;
        use crate::governance::scanner::scan;
        for fw in Framework::ALL {
            let source = render_component("Button", fw, &DEFAULT_CATEGORIES);
            let result = scan(&source, &VALIDATION_RULES);
            assert_eq!(
                result.error_count, 0,
                "template for {:?} violates governance rules: {:?}",
                fw, result.findings
            );
        }
    }
}
