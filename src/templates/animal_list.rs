pub static ANIMAL_LIST: &'static str = r#"
{{#each animals}}
<li class="animal-item" data-index="{{@index}}">{{this.name}}</li>
{{else}}
<li>No animals yet. Add one below!</li>
{{/each}}
"#;
